//! UI Components
//!
//! Reusable Leptos components.

mod todo_item;
mod todo_list;

pub use todo_item::TodoItem;
pub use todo_list::TodoList;

//! Todo Item Component
//!
//! Individual entry in the todo list.

use leptos::prelude::*;

/// A single todo block: title heading plus description body
#[component]
pub fn TodoItem(title: String, description: String) -> impl IntoView {
    view! {
        <div class="todo-item">
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

//! Todo List Component
//!
//! Renders one TodoItem per record, in input order.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::models::Todo;

/// Ordered list of todos, keyed by record id
#[component]
pub fn TodoList(todos: Vec<Todo>) -> impl IntoView {
    // Ids are expected to be unique; duplicates still render one block
    // each, but would confuse keyed updates if the list ever changed.
    let rows = move || todos.clone();

    view! {
        <div class="todo-list">
            <For
                each=rows
                key=|todo| todo.id
                children=move |todo| {
                    view! {
                        <TodoItem title=todo.title description=todo.description/>
                    }
                }
            />
        </div>
    }
}

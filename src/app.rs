//! Tudu Frontend App
//!
//! Top-level shell: seed data, add affordance, todo list.

use leptos::prelude::*;

use crate::components::TodoList;
use crate::models::Todo;

/// Fixed records shown on startup. The shell owns this sequence and only
/// ever hands read-only copies down the tree.
fn seed_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            title: "Learn React".to_string(),
            description: "Learn React".to_string(),
        },
        Todo {
            id: 2,
            title: "Learn TypeScript".to_string(),
            description: "Learn TS".to_string(),
        },
        Todo {
            id: 3,
            title: "Build Todo App".to_string(),
            description: "TUDU app".to_string(),
        },
    ]
}

#[component]
pub fn App() -> impl IntoView {
    let todos = seed_todos();

    // TODO: wire this up once the new-todo contract is decided
    // (where the fields come from, how ids get assigned).
    let add_todo = move |_| {
        web_sys::console::log_1(&"[APP] Add Todo clicked, create flow not implemented".into());
    };

    view! {
        <h1>"My Todo App"</h1>
        <button on:click=add_todo>"Add Todo"</button>
        <TodoList todos=todos/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_three_records_in_order() {
        let todos = seed_todos();

        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].title, "Learn React");
        assert_eq!(todos[0].description, "Learn React");
        assert_eq!(todos[1].id, 2);
        assert_eq!(todos[1].title, "Learn TypeScript");
        assert_eq!(todos[1].description, "Learn TS");
        assert_eq!(todos[2].id, 3);
        assert_eq!(todos[2].title, "Build Todo App");
        assert_eq!(todos[2].description, "TUDU app");
    }

    #[test]
    fn seed_ids_are_unique() {
        let todos = seed_todos();

        let mut ids: Vec<u32> = todos.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), todos.len());
    }

    #[test]
    fn seed_is_stable_across_calls() {
        // The shell re-derives its list from this constructor; no code
        // path mutates the records after creation.
        assert_eq!(seed_todos(), seed_todos());
    }
}

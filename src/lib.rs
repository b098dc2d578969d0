//! Tudu Frontend
//!
//! Client-side Leptos app showing the todo list.

pub mod app;
pub mod components;
pub mod models;

//! Frontend Models
//!
//! Data structures for the displayed todo records.

use serde::{Deserialize, Serialize};

/// Todo record rendered by the list
///
/// `id` is only used as the rendering key; within one list it is
/// expected to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    pub description: String,
}

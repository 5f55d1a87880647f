use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub content: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct TodoCreate {
    pub content: String,
}

/// Only the completion flag is mutable; content is fixed once created.
#[derive(Debug, Deserialize)]
pub struct TodoUpdate {
    pub completed: bool,
}

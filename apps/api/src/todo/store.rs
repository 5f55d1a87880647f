//! In-memory todo repository, injected via `AppState`.

use std::sync::{Arc, RwLock};

use super::models::Todo;

struct TodoState {
    todos: Vec<Todo>,
    latest_id: u32,
}

#[derive(Clone)]
pub struct TodoStore {
    inner: Arc<RwLock<TodoState>>,
}

impl TodoStore {
    pub fn seeded() -> Self {
        let todos = vec![
            Todo {
                id: 1,
                content: "Hive Inspection".to_string(),
                completed: true,
            },
            Todo {
                id: 2,
                content: "Pollen Patty Feeding".to_string(),
                completed: false,
            },
            Todo {
                id: 3,
                content: "Check Queen Bee Status and Egg Laying Pattern".to_string(),
                completed: false,
            },
        ];
        Self {
            inner: Arc::new(RwLock::new(TodoState {
                latest_id: todos.len() as u32,
                todos,
            })),
        }
    }

    pub fn all(&self) -> Vec<Todo> {
        self.inner.read().expect("todo lock poisoned").todos.clone()
    }

    pub fn add(&self, content: String) -> Todo {
        let mut state = self.inner.write().expect("todo lock poisoned");
        state.latest_id += 1;
        let todo = Todo {
            id: state.latest_id,
            content,
            completed: false,
        };
        state.todos.push(todo.clone());
        todo
    }

    /// Sets the completion flag. Returns `None` when the id is unknown.
    pub fn set_completed(&self, id: u32, completed: bool) -> Option<Todo> {
        let mut state = self.inner.write().expect("todo lock poisoned");
        let todo = state.todos.iter_mut().find(|t| t.id == id)?;
        todo.completed = completed;
        Some(todo.clone())
    }
}

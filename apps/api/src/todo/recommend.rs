//! Todo Orchestrator — AI-recommended todos with a fixed default set.
//!
//! The recommendation contract is exactly 3 items, ids 1..3, none completed.
//! Anything that breaks that contract (transport failure, unparsable
//! payload, wrong item count) degrades to the default set; this operation
//! never fails outward.

use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

use super::models::Todo;
use super::prompts::todo_recommendation_prompt;
use crate::llm_client::{strip_json_fences, AiBackend};
use crate::profile::context::pipe_context;
use crate::profile::store::ProfileStore;

const RECOMMENDED_COUNT: usize = 3;

/// The set returned whenever the AI path cannot deliver 3 valid todos.
pub fn default_todos() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            content: "Hive Inspection".to_string(),
            completed: false,
        },
        Todo {
            id: 2,
            content: "Check Queen Bee Status".to_string(),
            completed: false,
        },
        Todo {
            id: 3,
            content: "Varroa Mite Treatment".to_string(),
            completed: false,
        },
    ]
}

#[derive(Debug, Deserialize)]
struct TodoPayload {
    #[serde(default)]
    todos: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawTodo {
    id: Option<u32>,
    content: Option<String>,
    completed: Option<bool>,
}

/// Parses the `{"todos": [...]}` payload. Items missing any of `id`,
/// `content`, `completed` are dropped with a log line; at most 3 survive.
/// Accepted items are renumbered 1..N and forced incomplete, enforcing the
/// creation contract regardless of what the model chose.
fn parse_recommended_todos(raw: &str) -> Result<Vec<Todo>, serde_json::Error> {
    let payload: TodoPayload = serde_json::from_str(strip_json_fences(raw))?;

    let mut todos = Vec::new();
    for item in payload.todos {
        let Ok(raw_todo) = serde_json::from_value::<RawTodo>(item) else {
            warn!("Dropping non-object todo item");
            continue;
        };
        let (Some(_), Some(content), Some(_)) = (raw_todo.id, raw_todo.content, raw_todo.completed)
        else {
            warn!("Dropping todo item missing id, content, or completed");
            continue;
        };
        todos.push(Todo {
            id: todos.len() as u32 + 1,
            content,
            completed: false,
        });
        if todos.len() == RECOMMENDED_COUNT {
            break;
        }
    }
    Ok(todos)
}

#[derive(Clone)]
pub struct TodoRecommender {
    ai: Arc<dyn AiBackend>,
    profile: ProfileStore,
}

impl TodoRecommender {
    pub fn new(ai: Arc<dyn AiBackend>, profile: ProfileStore) -> Self {
        Self { ai, profile }
    }

    /// Returns exactly 3 recommended todos, AI-generated or default.
    pub async fn recommend(&self, context: &str) -> Vec<Todo> {
        let persona = pipe_context(&self.profile.get());
        let prompt = todo_recommendation_prompt(&persona, context);

        let raw = match self.ai.generate_content(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Todo AI call failed: {e}");
                return default_todos();
            }
        };

        match parse_recommended_todos(&raw) {
            Ok(todos) if todos.len() == RECOMMENDED_COUNT => todos,
            Ok(todos) => {
                warn!(
                    "Todo AI returned {} valid items (need {RECOMMENDED_COUNT}), using defaults",
                    todos.len()
                );
                default_todos()
            }
            Err(e) => {
                warn!("Todo AI response unparsable: {e}");
                default_todos()
            }
        }
    }
}

//! Axum route handlers for the todo API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::models::{Todo, TodoCreate, TodoUpdate};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AiTodoQuery {
    /// Free text the user typed, e.g. "honey", "queen bee", "winter".
    pub context: Option<String>,
}

/// GET /api/todos
pub async fn handle_get_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todos.all())
}

/// POST /api/todos
pub async fn handle_add_todo(
    State(state): State<AppState>,
    Json(create): Json<TodoCreate>,
) -> Result<Json<Todo>, AppError> {
    if create.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    Ok(Json(state.todos.add(create.content)))
}

/// PATCH /api/todos/:id
pub async fn handle_update_todo(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(update): Json<TodoUpdate>,
) -> Result<Json<Todo>, AppError> {
    state
        .todos
        .set_completed(id, update.completed)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Todo with ID {id} not found")))
}

/// GET /api/ai-todos?context=...
///
/// Always returns 3 todos — AI-recommended, or the default set when the AI
/// path fails.
pub async fn handle_ai_todos(
    State(state): State<AppState>,
    Query(query): Query<AiTodoQuery>,
) -> Json<Vec<Todo>> {
    let context = query.context.unwrap_or_default();
    Json(state.recommender.recommend(&context).await)
}

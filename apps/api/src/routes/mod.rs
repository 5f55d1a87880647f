pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::calendar::handlers as calendar;
use crate::chat::handlers as chat;
use crate::profile::handlers as profile;
use crate::state::AppState;
use crate::todo::handlers as todo;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Calendar prediction
        .route(
            "/api/calendar/schedule",
            post(calendar::handle_create_schedule),
        )
        .route(
            "/api/calendar/health",
            get(calendar::handle_calendar_health),
        )
        // Todos
        .route(
            "/api/todos",
            get(todo::handle_get_todos).post(todo::handle_add_todo),
        )
        .route("/api/todos/:id", patch(todo::handle_update_todo))
        .route("/api/ai-todos", get(todo::handle_ai_todos))
        // Chat
        .route("/api/chat/message", post(chat::handle_chat_message))
        // Profile
        .route(
            "/api/profile",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        .route("/api/profile/weather", put(profile::handle_update_weather))
        .route("/api/profile/location", get(profile::handle_get_location))
        .route("/api/profile/context", get(profile::handle_get_context))
        .with_state(state)
}

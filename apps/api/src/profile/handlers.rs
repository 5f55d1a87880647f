//! Axum route handlers for the profile API.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::profile::context::pipe_context;
use crate::profile::models::{ProfileUpdate, UserProfile, WeatherUpdate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContextResponse {
    pub context: String,
}

/// GET /api/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<UserProfile> {
    Json(state.profile.get())
}

/// PUT /api/profile
///
/// Partial update: unset fields keep their current values.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(update): Json<ProfileUpdate>,
) -> Json<UserProfile> {
    Json(state.profile.update(update))
}

/// PUT /api/profile/weather
///
/// Replaces the 7-day forecast pushed by the frontend weather layer.
pub async fn handle_update_weather(
    State(state): State<AppState>,
    Json(update): Json<WeatherUpdate>,
) -> Json<UserProfile> {
    Json(state.profile.update_weather(update))
}

/// GET /api/profile/location
pub async fn handle_get_location(State(state): State<AppState>) -> Json<Value> {
    let profile = state.profile.get();
    Json(json!({
        "lat": profile.location.latitude,
        "lon": profile.location.longitude,
    }))
}

/// GET /api/profile/context
///
/// The pipe-delimited AI context line, exposed for frontend debugging.
pub async fn handle_get_context(State(state): State<AppState>) -> Json<ContextResponse> {
    let profile = state.profile.get();
    Json(ContextResponse {
        context: pipe_context(&profile),
    })
}

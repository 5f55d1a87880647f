//! Axum route handlers for the calendar API.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde_json::{json, Value};

use super::models::{ScheduleRequest, ScheduleResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/calendar/schedule
///
/// Stores nothing — returns the submitted entries followed by AI (or
/// fallback) predictions. Request-shape problems are 400s; the prediction
/// pipeline itself never fails this handler.
pub async fn handle_create_schedule(
    State(state): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, AppError> {
    if request.tasks.is_empty() {
        return Err(AppError::Validation(
            "At least one task is required".to_string(),
        ));
    }

    let base = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            request.date
        ))
    })?;

    let entries = state.calendar.predict_schedules(base, &request.tasks).await;

    Ok(Json(ScheduleResponse { response: entries }))
}

/// GET /api/calendar/health
pub async fn handle_calendar_health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "Calendar AI"
    }))
}

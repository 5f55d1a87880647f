//! Response Validator/Parser for schedule predictions.
//!
//! The AI backend is schema-free text: the payload is only trusted after a
//! strict parse. Batch-level failures (not a JSON array at all) are
//! `ParseError` and drive the caller's fallback policy; item-level failures
//! (missing fields, bad or past dates) drop that item and keep the batch.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use super::models::ScheduleEntry;
use crate::llm_client::strip_json_fences;

/// The AI response is limited to this many accepted entries.
pub const MAX_AI_PREDICTIONS: usize = 5;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("AI response is not a JSON array: {0}")]
    Json(#[from] serde_json::Error),
}

/// One raw item as the model returned it. Fields are optional on purpose:
/// presence is validated explicitly, never assumed.
#[derive(Debug, Deserialize)]
struct RawPrediction {
    date: Option<String>,
    task: Option<String>,
}

/// Parses a raw schedule response into validated entries.
///
/// Strips a single optional code fence (with optional language tag), then
/// requires a JSON array. Per item:
/// - `date` and `task` must both be present;
/// - `date` must parse as `YYYY-MM-DD`;
/// - dates before `base` are rejected (the 30-day end bound is advisory and
///   not re-checked here).
///
/// Accepted entries are tagged AI-generated, order preserved, truncated to
/// `MAX_AI_PREDICTIONS`.
pub fn parse_schedule_predictions(
    raw: &str,
    base: NaiveDate,
) -> Result<Vec<ScheduleEntry>, ParseError> {
    let payload = strip_json_fences(raw);
    let items: Vec<serde_json::Value> = serde_json::from_str(payload)?;

    let mut entries = Vec::new();
    for item in items {
        let Ok(prediction) = serde_json::from_value::<RawPrediction>(item) else {
            warn!("Dropping non-object prediction item");
            continue;
        };
        let (Some(date_str), Some(task)) = (prediction.date, prediction.task) else {
            warn!("Dropping prediction item missing date or task");
            continue;
        };
        let date = match NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                warn!("Dropping prediction with malformed date: {date_str}");
                continue;
            }
        };
        if date < base {
            warn!("Dropping past-dated prediction: {date} < {base}");
            continue;
        }
        entries.push(ScheduleEntry::ai(date, task));
        if entries.len() == MAX_AI_PREDICTIONS {
            break;
        }
    }

    Ok(entries)
}

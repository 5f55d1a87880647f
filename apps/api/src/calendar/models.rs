use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single calendar entry. `ai` is false only for user-submitted entries.
///
/// The wire field is `AI` to match what the frontend calendar renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub task: String,
    #[serde(rename = "AI")]
    pub ai: bool,
}

impl ScheduleEntry {
    pub fn user(date: NaiveDate, task: impl Into<String>) -> Self {
        Self {
            date,
            task: task.into(),
            ai: false,
        }
    }

    pub fn ai(date: NaiveDate, task: impl Into<String>) -> Self {
        Self {
            date,
            task: task.into(),
            ai: true,
        }
    }
}

/// The 30-day horizon AI predictions are asked to stay within.
///
/// The end bound is advisory — it is stated in the prompt but not re-checked
/// after parsing. Only `date >= base` is enforced by the validator.
#[derive(Debug, Clone, Copy)]
pub struct PredictionWindow {
    pub base: NaiveDate,
    pub end: NaiveDate,
}

impl PredictionWindow {
    pub const HORIZON_DAYS: i64 = 30;

    pub fn new(base: NaiveDate) -> Self {
        Self {
            base,
            end: base + Duration::days(Self::HORIZON_DAYS),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    /// Anchor date for the submitted tasks, `YYYY-MM-DD`.
    pub date: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub response: Vec<ScheduleEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_window_spans_30_days() {
        let base = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let window = PredictionWindow::new(base);
        assert_eq!(window.end, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
    }

    #[test]
    fn test_schedule_entry_serializes_ai_field_uppercase() {
        let entry = ScheduleEntry::ai(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(), "Feed bees");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["AI"], true);
        assert_eq!(json["date"], "2025-06-04");
    }
}

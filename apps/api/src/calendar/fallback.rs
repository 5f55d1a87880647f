//! Fallback Predictor — deterministic rule-based predictions used when the
//! AI response cannot be parsed.
//!
//! Keyword classification is case-insensitive substring matching over each
//! user task. Transport failures do NOT reach this module: the orchestrator
//! returns an empty AI set in that case.

use chrono::{Duration, NaiveDate};

use super::models::ScheduleEntry;
use super::parser::MAX_AI_PREDICTIONS;

/// Suffix marking fallback entries as AI-attributed in the calendar UI.
pub const AI_MARKER: &str = "(AI suggested)";

const FEEDING_KEYWORDS: &[&str] = &["feed", "feeding"];
const INSPECTION_KEYWORDS: &[&str] = &["check", "inspect"];
const HARVEST_KEYWORDS: &[&str] = &["harvest"];

fn matches_any(task: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| task.contains(k))
}

/// Rule-based prediction over the user's submitted tasks.
///
/// - feeding-like task: repeat at base+3 and base+6 days
/// - inspection-like task: follow-up at base+7 days
/// - harvest-like task: equipment preparation at base-2 days — this can land
///   before the base date; the behavior is kept as-is (known quirk of the
///   product rules)
/// - unmatched task: nothing
///
/// Output is truncated to `MAX_AI_PREDICTIONS` entries, all AI-flagged.
pub fn rule_based_predictions(base: NaiveDate, tasks: &[String]) -> Vec<ScheduleEntry> {
    let mut predictions = Vec::new();

    for task in tasks {
        let task_lower = task.to_lowercase();

        if matches_any(&task_lower, FEEDING_KEYWORDS) {
            predictions.push(ScheduleEntry::ai(
                base + Duration::days(3),
                format!("{task} {AI_MARKER}"),
            ));
            predictions.push(ScheduleEntry::ai(
                base + Duration::days(6),
                format!("{task} {AI_MARKER}"),
            ));
        } else if matches_any(&task_lower, INSPECTION_KEYWORDS) {
            predictions.push(ScheduleEntry::ai(
                base + Duration::days(7),
                format!("{task} {AI_MARKER}"),
            ));
        } else if matches_any(&task_lower, HARVEST_KEYWORDS) {
            predictions.push(ScheduleEntry::ai(
                base - Duration::days(2),
                format!("Prepare harvest equipment {AI_MARKER}"),
            ));
        }
    }

    predictions.truncate(MAX_AI_PREDICTIONS);
    predictions
}

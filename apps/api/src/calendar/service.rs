//! Schedule Orchestrator — the calendar prediction pipeline.
//!
//! Flow: context build → prompt compose → AI gateway → parse/validate →
//!       fallback policy → merge with user entries.
//!
//! Degradation policy lives here, in one place:
//! - transport/API failure: user entries only, no AI entries, no fallback;
//! - unparsable payload: rule-based fallback predictions;
//! - per-item validation failures: handled inside the parser, never fatal.
//!
//! `predict_schedules` never fails outward.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use super::fallback::rule_based_predictions;
use super::models::{PredictionWindow, ScheduleEntry};
use super::parser::parse_schedule_predictions;
use super::prompts::schedule_prediction_prompt;
use crate::llm_client::AiBackend;
use crate::profile::store::ProfileStore;

#[derive(Clone)]
pub struct CalendarService {
    ai: Arc<dyn AiBackend>,
    profile: ProfileStore,
}

impl CalendarService {
    pub fn new(ai: Arc<dyn AiBackend>, profile: ProfileStore) -> Self {
        Self { ai, profile }
    }

    /// Returns the user's entries (input order, not AI-flagged) followed by
    /// at most 5 AI or fallback entries.
    pub async fn predict_schedules(
        &self,
        base: NaiveDate,
        tasks: &[String],
    ) -> Vec<ScheduleEntry> {
        let mut all: Vec<ScheduleEntry> = tasks
            .iter()
            .map(|task| ScheduleEntry::user(base, task.clone()))
            .collect();

        let predictions = self.ai_predictions(base, tasks).await;
        info!(
            "Schedule prediction: {} user entries, {} AI entries",
            all.len(),
            predictions.len()
        );
        all.extend(predictions);
        all
    }

    async fn ai_predictions(&self, base: NaiveDate, tasks: &[String]) -> Vec<ScheduleEntry> {
        let window = PredictionWindow::new(base);
        let profile = self.profile.get();
        let today = Utc::now().date_naive();
        let prompt = schedule_prediction_prompt(today, &window, &profile, tasks);

        // Transport failure degrades to no AI entries — the fallback is
        // reserved for unparsable payloads.
        let raw = match self.ai.generate_content(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Schedule AI call failed: {e}");
                return Vec::new();
            }
        };

        match parse_schedule_predictions(&raw, base) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Schedule AI response unparsable ({e}), using rule-based fallback");
                rule_based_predictions(base, tasks)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::ScriptedAi;

    fn service(ai: ScriptedAi) -> CalendarService {
        CalendarService::new(Arc::new(ai), ProfileStore::seeded())
    }

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn test_user_entries_come_first_in_input_order() {
        let ai = ScriptedAi::replies(r#"[{"date": "2025-06-05", "task": "Inspect"}]"#);
        let tasks = vec!["Feed syrup".to_string(), "Clean boxes".to_string()];
        let entries = service(ai).predict_schedules(base(), &tasks).await;

        assert_eq!(entries[0].task, "Feed syrup");
        assert_eq!(entries[1].task, "Clean boxes");
        assert!(!entries[0].ai);
        assert!(!entries[1].ai);
        assert_eq!(entries[0].date, base());
        assert_eq!(entries[2].task, "Inspect");
        assert!(entries[2].ai);
    }

    #[tokio::test]
    async fn test_never_more_than_five_ai_entries() {
        let raw = r#"[
            {"date": "2025-06-02", "task": "t1"},
            {"date": "2025-06-03", "task": "t2"},
            {"date": "2025-06-04", "task": "t3"},
            {"date": "2025-06-05", "task": "t4"},
            {"date": "2025-06-06", "task": "t5"},
            {"date": "2025-06-07", "task": "t6"},
            {"date": "2025-06-08", "task": "t7"}
        ]"#;
        let tasks = vec!["Feed syrup".to_string()];
        let entries = service(ScriptedAi::replies(raw))
            .predict_schedules(base(), &tasks)
            .await;
        let ai_count = entries.iter().filter(|e| e.ai).count();
        assert_eq!(ai_count, 5);
    }

    #[tokio::test]
    async fn test_transport_failure_returns_user_entries_only() {
        // Transport failure must NOT trigger the rule-based fallback, even
        // though these tasks would match its keywords.
        let tasks = vec!["Feed the colony".to_string()];
        let entries = service(ScriptedAi::fails())
            .predict_schedules(base(), &tasks)
            .await;
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].ai);
    }

    #[tokio::test]
    async fn test_unparsable_payload_triggers_fallback() {
        let tasks = vec!["Feed the colony".to_string()];
        let entries = service(ScriptedAi::replies("I cannot answer in JSON, sorry."))
            .predict_schedules(base(), &tasks)
            .await;

        // 1 user entry + fallback feeding rule (base+3, base+6)
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].date, NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
        assert_eq!(entries[2].date, NaiveDate::from_ymd_opt(2025, 6, 7).unwrap());
        assert!(entries[1].ai && entries[2].ai);
    }

    #[tokio::test]
    async fn test_parsable_but_all_invalid_items_yields_no_fallback() {
        // A valid JSON array whose items all fail validation is NOT a parse
        // failure: the result is an empty AI set, not fallback predictions.
        let raw = r#"[{"date": "2020-01-01", "task": "ancient"}]"#;
        let tasks = vec!["Feed the colony".to_string()];
        let entries = service(ScriptedAi::replies(raw))
            .predict_schedules(base(), &tasks)
            .await;
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].ai);
    }

    #[tokio::test]
    async fn test_prompt_carries_profile_and_window() {
        let ai = Arc::new(ScriptedAi::replies("[]"));
        let svc = CalendarService::new(ai.clone(), ProfileStore::seeded());
        let tasks = vec!["Harvest honey".to_string()];

        let entries = svc.predict_schedules(base(), &tasks).await;
        // Empty-array reply parses fine: no AI entries, no fallback
        assert_eq!(entries.len(), 1);

        let prompt = ai.last_prompt().unwrap();
        assert!(prompt.contains("Alex Johnson"));
        assert!(prompt.contains("2025-06-01"));
        assert!(prompt.contains("2025-07-01"));
        assert!(prompt.contains("Harvest honey"));
    }
}

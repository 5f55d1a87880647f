//! Prompt Composer for schedule prediction.
//!
//! Pure string construction — no network or parsing work happens here.
//! The output contract (JSON array of `{date, task}`, max 5 items, dates
//! inside the prediction window, English only) is asserted in the prompt
//! and enforced by `parser`.

use chrono::{Duration, NaiveDate};

use super::models::PredictionWindow;
use crate::profile::context::profile_summary;
use crate::profile::models::UserProfile;

/// Schedule prediction prompt template.
/// Replace: {today}, {base_date}, {end_date}, {profile}, {tasks},
///          {example_early}, {example_late}
const SCHEDULE_PROMPT_TEMPLATE: &str = r#"You are a schedule management AI for beekeepers.

**IMPORTANT: Today's date is {today}. Every predicted date MUST fall between {base_date} and {end_date}.**

User profile:
{profile}

Schedule the user just added:
- Date: {base_date}
- Tasks: {tasks}

Analyze the tasks above and predict the related work needed **within 30 days after {base_date}**.

Prediction rules:
1. For recurring work (feeding, inspections, and similar) recommend the next occurrence
2. Recommend preparation or follow-up work for specific tasks
3. Take the season and the user's experience into account
4. Recommend at most 5 future schedule items
5. Each item must be specific and actionable
6. **Dates MUST be within {base_date} ~ {end_date}**
7. Respond in English only

Response format (JSON):
[
  {"date": "YYYY-MM-DD", "task": "task description"},
  {"date": "YYYY-MM-DD", "task": "task description"}
]

Example:
[
  {"date": "{example_early}", "task": "Inspect the hives"},
  {"date": "{example_late}", "task": "Add feed"}
]

**Note: use only dates on or after {base_date}. Output JSON only, with no extra explanation.**"#;

/// Builds the schedule prediction prompt for one request.
pub fn schedule_prediction_prompt(
    today: NaiveDate,
    window: &PredictionWindow,
    profile: &UserProfile,
    tasks: &[String],
) -> String {
    SCHEDULE_PROMPT_TEMPLATE
        .replace("{today}", &today.to_string())
        .replace("{base_date}", &window.base.to_string())
        .replace("{end_date}", &window.end.to_string())
        .replace("{profile}", &profile_summary(profile))
        .replace("{tasks}", &tasks.join(", "))
        .replace("{example_early}", &(window.base + Duration::days(3)).to_string())
        .replace("{example_late}", &(window.base + Duration::days(7)).to_string())
}

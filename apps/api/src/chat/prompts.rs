//! Prompt Composer for the chat assistant.
//!
//! The system prompt is rebuilt per request so it always carries the current
//! date/time, today's weather, and up to 7 forecast days.

use chrono::{DateTime, Utc};

use crate::profile::context::profile_summary;
use crate::profile::models::UserProfile;

/// Forecast rows rendered into the prompt, at most.
const FORECAST_DAYS_SHOWN: usize = 7;

fn today_weather_line(profile: &UserProfile) -> String {
    match profile.today_weather() {
        Some(today) => {
            let mut parts = vec![format!("Condition: {}", today.weather)];
            if let Some(temp_c) = today.avg_temp_c {
                let fahrenheit = today
                    .avg_temp_f
                    .map(|t| format!(" ({t}°F)"))
                    .unwrap_or_default();
                parts.push(format!("Temperature: {temp_c}°C{fahrenheit}"));
            }
            parts.join(", ")
        }
        None => "No weather information available".to_string(),
    }
}

fn forecast_block(profile: &UserProfile) -> String {
    let days = &profile.weather_forecast.days;
    if days.len() < 2 {
        return "No forecast information available".to_string();
    }
    days.iter()
        .take(FORECAST_DAYS_SHOWN)
        .map(|day| {
            let temp = day
                .avg_temp_c
                .map(|t| format!(", {t}°C"))
                .unwrap_or_default();
            format!("  - {}: {}{temp}", day.date, day.weather)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the per-request system prompt for the chat assistant.
pub fn chat_system_prompt(now: DateTime<Utc>, profile: &UserProfile) -> String {
    format!(
        r#"You are 'Bloom AI', a professional AI assistant for beekeepers.

Current time information:
- Current date: {date} ({weekday})
- Current time: {datetime}

Today's weather:
- {today_weather}

7-day forecast:
{forecast}

User profile:
{profile}

Your role:
1. Answer the user's questions helpfully.
2. Answer date and time questions from the current time information above.
3. Answer weather questions from today's weather and the forecast above.
4. Give beekeeping advice that accounts for current and upcoming weather.
5. Suggest weather-aware scheduling (for example, avoid hive inspections on rainy days).
6. Provide expert guidance on hive management, bee health, and disease control.
7. Share seasonal beekeeping guides and honey production tips.
8. Explain bee behavior and the use of beekeeping tools and equipment.

Response guidelines:
- Keep a friendly, professional tone.
- Give practical, actionable advice.
- Factor in the user's experience level, location, and season, but only mention them when asked.
- Explain complex concepts simply; give step-by-step guides when useful.
- Put safety and bee welfare first.
- Keep answers short — do not over-explain.

Start a new line after every sentence.
Respond in English."#,
        date = now.format("%Y-%m-%d"),
        weekday = now.format("%A"),
        datetime = now.format("%Y-%m-%d %H:%M"),
        today_weather = today_weather_line(profile),
        forecast = forecast_block(profile),
        profile = profile_summary(profile),
    )
}

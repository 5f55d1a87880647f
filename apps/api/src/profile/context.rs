//! Context Builder — renders a profile snapshot for prompt embedding.
//!
//! Pure functions, no failure modes: missing optional fields (weather,
//! last inspection) are omitted rather than erroring.

use super::models::UserProfile;

/// Multi-line key-value summary embedded into the schedule and chat prompts.
pub fn profile_summary(profile: &UserProfile) -> String {
    let mut lines = vec![
        format!("- Name: {}", profile.name),
        format!("- Occupation: {}", profile.occupation),
        format!(
            "- Location: {}, {}, {}",
            profile.location.city, profile.location.state, profile.location.country
        ),
        format!(
            "- Beekeeping experience: {} years",
            profile.beekeeping_info.experience_years
        ),
        format!(
            "- Number of hives: {}",
            profile.beekeeping_info.number_of_hives
        ),
        format!(
            "- Beekeeping type: {}",
            profile.beekeeping_info.beekeeping_type
        ),
        format!("- Primary goal: {}", profile.beekeeping_info.primary_goal),
        format!("- Current season: {}", profile.current_season),
    ];
    if let Some(inspection) = &profile.last_hive_inspection {
        lines.push(format!("- Last hive inspection: {inspection}"));
    }
    lines.join("\n")
}

/// Single-line pipe-delimited context for lightweight prompts
/// (todo recommendation).
pub fn pipe_context(profile: &UserProfile) -> String {
    let mut parts = vec![
        format!(
            "Location: {}, {}",
            profile.location.city, profile.location.state
        ),
        format!(
            "Experience: {} years",
            profile.beekeeping_info.experience_years
        ),
        format!(
            "Number of hives: {}",
            profile.beekeeping_info.number_of_hives
        ),
        format!("Type: {} beekeeper", profile.beekeeping_info.beekeeping_type),
        format!("Primary goal: {}", profile.beekeeping_info.primary_goal),
        format!("Current season: {}", profile.current_season),
    ];

    if let Some(today) = profile.today_weather() {
        let temp = today
            .avg_temp_c
            .map(|t| format!(", {t}°C"))
            .unwrap_or_default();
        parts.push(format!("Today's weather: {}{temp}", today.weather));
    }

    if let Some(inspection) = &profile.last_hive_inspection {
        parts.push(format!("Last inspection: {inspection}"));
    }

    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::{ForecastDay, UserProfile};

    #[test]
    fn test_pipe_context_omits_missing_optionals() {
        let profile = UserProfile::seeded();
        let context = pipe_context(&profile);
        assert!(context.starts_with("Location: Orlando, Florida"));
        assert!(context.contains("Experience: 5 years"));
        assert!(!context.contains("Today's weather"));
        assert!(!context.contains("Last inspection"));
    }

    #[test]
    fn test_pipe_context_includes_weather_and_inspection_when_present() {
        let mut profile = UserProfile::seeded();
        profile.weather_forecast.days.push(ForecastDay {
            date: "2025-10-04".to_string(),
            weather: "sun".to_string(),
            avg_temp_c: Some(29.4),
            avg_temp_f: Some(84.9),
        });
        profile.last_hive_inspection = Some("2025-09-20".to_string());

        let context = pipe_context(&profile);
        assert!(context.contains("Today's weather: sun, 29.4°C"));
        assert!(context.contains("Last inspection: 2025-09-20"));
    }

    #[test]
    fn test_pipe_context_weather_without_temperature() {
        let mut profile = UserProfile::seeded();
        profile.weather_forecast.days.push(ForecastDay {
            date: "2025-10-04".to_string(),
            weather: "cloud".to_string(),
            avg_temp_c: None,
            avg_temp_f: None,
        });
        let context = pipe_context(&profile);
        assert!(context.contains("Today's weather: cloud"));
        assert!(!context.contains("°C"));
    }

    #[test]
    fn test_profile_summary_key_values() {
        let profile = UserProfile::seeded();
        let summary = profile_summary(&profile);
        assert!(summary.contains("- Name: Alex Johnson"));
        assert!(summary.contains("- Number of hives: 12"));
        assert!(summary.contains("- Current season: spring"));
        assert!(!summary.contains("Last hive inspection"));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// `beekeeping_type`: Hobby, Commercial, Sideline.
/// `primary_goal`: Honey Production, Pollination, Queen Rearing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeekeepingInfo {
    pub experience_years: u32,
    pub number_of_hives: u32,
    pub beekeeping_type: String,
    pub primary_goal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub preferred_language: String,
    pub notification_enabled: bool,
    pub ai_suggestions_enabled: bool,
}

/// One day of the 7-day forecast pushed in by the frontend weather layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    /// Short condition label, e.g. "sun", "rain", "cloud".
    pub weather: String,
    #[serde(rename = "avgTempC")]
    pub avg_temp_c: Option<f64>,
    #[serde(rename = "avgTempF")]
    pub avg_temp_f: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub days: Vec<ForecastDay>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// The user persona snapshot embedded into every AI prompt.
/// Read-only from the pipeline's point of view; mutations go through
/// `ProfileStore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub occupation: String,
    pub location: Location,
    pub beekeeping_info: BeekeepingInfo,
    pub preferences: Preferences,
    pub weather_forecast: WeatherForecast,
    /// spring, summer, fall, winter
    pub current_season: String,
    pub last_hive_inspection: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// The seeded persona used until a real account system exists.
    pub fn seeded() -> Self {
        let now = Utc::now();
        UserProfile {
            name: "Alex Johnson".to_string(),
            occupation: "Beekeeper".to_string(),
            location: Location {
                city: "Orlando".to_string(),
                state: "Florida".to_string(),
                country: "USA".to_string(),
                latitude: 28.5649675,
                longitude: -81.1614906,
            },
            beekeeping_info: BeekeepingInfo {
                experience_years: 5,
                number_of_hives: 12,
                beekeeping_type: "Hobby".to_string(),
                primary_goal: "Honey Production".to_string(),
            },
            preferences: Preferences {
                preferred_language: "en".to_string(),
                notification_enabled: true,
                ai_suggestions_enabled: true,
            },
            weather_forecast: WeatherForecast::default(),
            current_season: "spring".to_string(),
            last_hive_inspection: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Today's forecast entry, if the weather layer has pushed one.
    pub fn today_weather(&self) -> Option<&ForecastDay> {
        self.weather_forecast.days.first()
    }
}

/// Partial profile update — unset fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub location: Option<Location>,
    pub beekeeping_info: Option<BeekeepingInfo>,
    pub preferences: Option<Preferences>,
    pub current_season: Option<String>,
    pub last_hive_inspection: Option<String>,
}

/// Replaces the 7-day forecast wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherUpdate {
    pub days: Vec<ForecastDay>,
}

//! In-memory profile repository.
//!
//! The store is owned by `AppState` and injected into handlers and
//! orchestrators; nothing in the pipeline reaches for global state.

use std::sync::{Arc, RwLock};

use chrono::Utc;

use super::models::{ProfileUpdate, UserProfile, WeatherForecast, WeatherUpdate};

#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<RwLock<UserProfile>>,
}

impl ProfileStore {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            inner: Arc::new(RwLock::new(profile)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(UserProfile::seeded())
    }

    /// Returns a snapshot of the current profile.
    pub fn get(&self) -> UserProfile {
        self.inner.read().expect("profile lock poisoned").clone()
    }

    /// Applies a partial update and returns the new snapshot.
    pub fn update(&self, update: ProfileUpdate) -> UserProfile {
        let mut profile = self.inner.write().expect("profile lock poisoned");
        if let Some(name) = update.name {
            profile.name = name;
        }
        if let Some(location) = update.location {
            profile.location = location;
        }
        if let Some(info) = update.beekeeping_info {
            profile.beekeeping_info = info;
        }
        if let Some(preferences) = update.preferences {
            profile.preferences = preferences;
        }
        if let Some(season) = update.current_season {
            profile.current_season = season;
        }
        if let Some(inspection) = update.last_hive_inspection {
            profile.last_hive_inspection = Some(inspection);
        }
        profile.updated_at = Utc::now();
        profile.clone()
    }

    /// Replaces the 7-day forecast and stamps `last_updated`.
    pub fn update_weather(&self, update: WeatherUpdate) -> UserProfile {
        let mut profile = self.inner.write().expect("profile lock poisoned");
        profile.weather_forecast = WeatherForecast {
            days: update.days,
            last_updated: Some(Utc::now()),
        };
        profile.updated_at = Utc::now();
        profile.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::models::ForecastDay;

    #[test]
    fn test_update_leaves_unset_fields_untouched() {
        let store = ProfileStore::seeded();
        let updated = store.update(ProfileUpdate {
            current_season: Some("winter".to_string()),
            ..Default::default()
        });
        assert_eq!(updated.current_season, "winter");
        assert_eq!(updated.name, "Alex Johnson");
        assert_eq!(updated.beekeeping_info.experience_years, 5);
    }

    #[test]
    fn test_update_weather_replaces_forecast() {
        let store = ProfileStore::seeded();
        let updated = store.update_weather(WeatherUpdate {
            days: vec![ForecastDay {
                date: "2025-10-04".to_string(),
                weather: "rain".to_string(),
                avg_temp_c: Some(21.0),
                avg_temp_f: Some(69.8),
            }],
        });
        assert_eq!(updated.weather_forecast.days.len(), 1);
        assert!(updated.weather_forecast.last_updated.is_some());
        assert_eq!(updated.today_weather().unwrap().weather, "rain");
    }
}

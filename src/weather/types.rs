//! Weather snapshot types.

use serde::{Deserialize, Serialize};

/// Current conditions for a city, as consumed by the seasonal advisory
/// generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Relative humidity in [0, 100].
    pub humidity_percent: f64,
    /// Short condition word, e.g. "Rain", "Clear", "Clouds".
    pub condition: String,
    /// Longer condition text, e.g. "light rain".
    pub description: String,
    /// Provider icon identifier, e.g. "10d".
    pub icon_code: String,
}

/// Raw response shape of the weather endpoint (OpenWeatherMap current
/// weather). Only the fields the snapshot needs are modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherResponse {
    #[serde(default)]
    pub name: String,
    pub main: RawWeatherMain,
    #[serde(default)]
    pub weather: Vec<RawWeatherCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawWeatherMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWeatherCondition {
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl From<RawWeatherResponse> for WeatherSnapshot {
    fn from(raw: RawWeatherResponse) -> Self {
        let condition = raw.weather.into_iter().next().unwrap_or_default();
        Self {
            city: raw.name,
            temperature_c: raw.main.temp,
            feels_like_c: raw.main.feels_like,
            humidity_percent: raw.main.humidity,
            condition: condition.main,
            description: condition.description,
            icon_code: condition.icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_raw_response() {
        let json = r#"{
            "name": "Johannesburg",
            "main": {"temp": 24.5, "feels_like": 23.8, "humidity": 55},
            "weather": [{"main": "Clouds", "description": "scattered clouds", "icon": "03d"}]
        }"#;
        let raw: RawWeatherResponse = serde_json::from_str(json).unwrap();
        let snapshot = WeatherSnapshot::from(raw);

        assert_eq!(snapshot.city, "Johannesburg");
        assert_eq!(snapshot.temperature_c, 24.5);
        assert_eq!(snapshot.feels_like_c, 23.8);
        assert_eq!(snapshot.humidity_percent, 55.0);
        assert_eq!(snapshot.condition, "Clouds");
        assert_eq!(snapshot.description, "scattered clouds");
        assert_eq!(snapshot.icon_code, "03d");
    }

    #[test]
    fn test_snapshot_from_raw_without_condition_block() {
        let json = r#"{
            "name": "Durban",
            "main": {"temp": 30.0, "feels_like": 33.1, "humidity": 80}
        }"#;
        let raw: RawWeatherResponse = serde_json::from_str(json).unwrap();
        let snapshot = WeatherSnapshot::from(raw);

        assert_eq!(snapshot.condition, "");
        assert_eq!(snapshot.icon_code, "");
        assert_eq!(snapshot.humidity_percent, 80.0);
    }
}

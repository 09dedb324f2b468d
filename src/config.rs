//! Runtime configuration for the external collaborators.
//!
//! Everything is environment-variable driven, defaulting to a local
//! classifier backend and the OpenWeatherMap current-weather endpoint.

/// Endpoint configuration for the classification and weather services.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Classification endpoint (single multipart POST).
    pub classifier_url: String,
    /// Weather endpoint (single GET with query parameters).
    pub weather_url: String,
    /// API key sent to the weather endpoint. May be empty for self-hosted
    /// proxies that do not require one.
    pub weather_api_key: String,
    /// ISO country code appended to weather city queries.
    pub country_code: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            classifier_url: "http://127.0.0.1:8000/predict".to_string(),
            weather_url: "https://api.openweathermap.org/data/2.5/weather".to_string(),
            weather_api_key: String::new(),
            country_code: "ZA".to_string(),
        }
    }
}

impl AppConfig {
    /// Build a config from `TRICHOFY_*` environment variables, falling back
    /// to the defaults for anything unset or empty.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            classifier_url: env_or("TRICHOFY_CLASSIFIER_URL", defaults.classifier_url),
            weather_url: env_or("TRICHOFY_WEATHER_URL", defaults.weather_url),
            weather_api_key: env_or("TRICHOFY_WEATHER_API_KEY", defaults.weather_api_key),
            country_code: env_or("TRICHOFY_COUNTRY", defaults.country_code),
        }
    }
}

fn env_or(key: &str, fallback: String) -> String {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => fallback,
    }
}

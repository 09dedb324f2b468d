//! Single-shot HTTP client for the weather endpoint.

use std::time::Duration;

use tracing::{error, info};

use crate::error::TrichofyError;

use super::types::{RawWeatherResponse, WeatherSnapshot};

/// Client for the city weather lookup.
///
/// One GET with query parameters per lookup, metric units, no retry.
pub struct WeatherClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("Trichofy/1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch current conditions for a city.
    ///
    /// Transport failure or a non-success status maps to
    /// `BackendUnavailable`.
    pub async fn current(
        &self,
        city: &str,
        country_code: &str,
    ) -> Result<WeatherSnapshot, TrichofyError> {
        let query = format!("{},{}", city, country_code);
        info!("Fetching weather for '{}'", query);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query.as_str()),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Weather request failed: {}", e);
                TrichofyError::BackendUnavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Weather endpoint returned {}", status);
            return Err(TrichofyError::BackendUnavailable(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let raw: RawWeatherResponse = response.json().await.map_err(|e| {
            error!("Weather response was not valid JSON: {}", e);
            TrichofyError::BackendUnavailable(e.to_string())
        })?;

        Ok(WeatherSnapshot::from(raw))
    }
}

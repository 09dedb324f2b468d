//! Session facade over the advisory engine.
//!
//! `AdvisorySession` owns the configuration, the backend clients, the
//! provider catalog, the loaded care rules and one `Flow` per backend
//! interaction. It is the boundary a frontend talks to: every fallible
//! method returns `Result<T, String>` with a user-facing message, never a
//! raw error type.

use std::collections::HashMap;

use tracing::error;

use crate::advisor::{
    default_rules, seasonal_tips, weekly_plan, AdvisoryTip, CareRules, RoutineBlock,
    RoutineIntensity,
};
use crate::catalog::{ProviderCatalog, ProviderEntry, SubmissionFields};
use crate::classifier::{ClassificationResult, ClassifierClient};
use crate::config::AppConfig;
use crate::error::TrichofyError;
use crate::flow::Flow;
use crate::weather::{WeatherClient, WeatherSnapshot};

/// A photo staged for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoSelection {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct AdvisorySession {
    config: AppConfig,
    classifier: ClassifierClient,
    weather_client: WeatherClient,
    catalog: ProviderCatalog,
    rules: CareRules,
    analysis: Flow<PhotoSelection, ClassificationResult>,
    weather_flow: Flow<String, WeatherSnapshot>,
}

impl AdvisorySession {
    pub fn new(config: AppConfig) -> Self {
        let classifier = ClassifierClient::new(config.classifier_url.clone());
        let weather_client =
            WeatherClient::new(config.weather_url.clone(), config.weather_api_key.clone());
        Self {
            config,
            classifier,
            weather_client,
            catalog: ProviderCatalog::new(),
            rules: default_rules(),
            analysis: Flow::Idle,
            weather_flow: Flow::Idle,
        }
    }

    /// Build a session from environment configuration.
    pub fn from_env() -> Self {
        Self::new(AppConfig::from_env())
    }

    /// Stage a photo for analysis. Clears any previous result or failure.
    pub fn select_photo(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.analysis.select(PhotoSelection {
            file_name: file_name.into(),
            bytes,
        });
    }

    /// Run classification on the staged photo.
    ///
    /// With no photo staged this fails without touching the backend. A
    /// failed request clears the previous result, so stale advice is never
    /// shown next to an error.
    pub async fn analyze(&mut self) -> Result<ClassificationResult, String> {
        let selection = self.analysis.begin().map_err(|_| {
            "Please upload a clear hair photo first.".to_string()
        })?;

        match self
            .classifier
            .analyze(selection.bytes, &selection.file_name)
            .await
        {
            Ok(result) => {
                self.analysis.complete(result.clone());
                Ok(result)
            }
            Err(e) => {
                error!("Analysis failed: {}", e);
                let message = match e {
                    TrichofyError::BackendUnavailable(_) => {
                        "Could not analyze image. Ensure backend is running.".to_string()
                    }
                    other => other.to_string(),
                };
                self.analysis.fail(message.clone());
                Err(message)
            }
        }
    }

    /// Stage a city for the weather lookup.
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.weather_flow.select(city.into());
    }

    /// Fetch current conditions for the staged city.
    pub async fn fetch_weather(&mut self) -> Result<WeatherSnapshot, String> {
        let city = self
            .weather_flow
            .begin()
            .map_err(|_| "Enter a city first.".to_string())?;

        match self
            .weather_client
            .current(&city, &self.config.country_code)
            .await
        {
            Ok(snapshot) => {
                self.weather_flow.complete(snapshot.clone());
                Ok(snapshot)
            }
            Err(e) => {
                error!("Weather lookup failed: {}", e);
                let message = format!("Could not fetch weather for {}.", city);
                self.weather_flow.fail(message.clone());
                Err(message)
            }
        }
    }

    pub fn analysis_result(&self) -> Option<&ClassificationResult> {
        self.analysis.result()
    }

    pub fn weather_snapshot(&self) -> Option<&WeatherSnapshot> {
        self.weather_flow.result()
    }

    /// Seasonal tips for the current analysis and weather results. Empty
    /// until both flows have succeeded.
    pub fn seasonal_tips(&self) -> Vec<AdvisoryTip> {
        seasonal_tips(
            &self.rules,
            self.analysis.result().map(|r| r.texture),
            self.weather_flow.result(),
        )
    }

    /// Weekly routine for the current analysis. Empty until a
    /// classification has succeeded.
    pub fn weekly_plan(&self, intensity: &str) -> Vec<RoutineBlock> {
        match self.analysis.result() {
            Some(result) => weekly_plan(result.texture, RoutineIntensity::parse(intensity)),
            None => Vec::new(),
        }
    }

    /// Submit a provider product into the session catalog.
    pub fn submit_product(
        &self,
        fields: &SubmissionFields,
        category_id: Option<&str>,
        extras: &HashMap<String, String>,
    ) -> Result<ProviderEntry, String> {
        self.catalog
            .submit(fields, category_id, extras)
            .map_err(String::from)
    }

    pub fn provider_products(&self) -> Vec<ProviderEntry> {
        self.catalog.list()
    }
}

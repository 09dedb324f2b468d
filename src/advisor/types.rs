//! Type definitions for the seasonal care rule engine.
//!
//! Configuration types deserialize from TOML (the embedded rules table);
//! output types serialize to JSON for frontend communication.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::weather::WeatherSnapshot;

// =============================================================================
// CONFIGURATION TYPES (loaded from TOML)
// =============================================================================

/// Root configuration loaded from care_rules.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct CareRules {
    /// Base tips per texture bucket, keyed by bucket id ("coily", "curly", ...)
    pub textures: HashMap<String, TextureTips>,
    /// Weather threshold rules, evaluated independently in file order
    pub weather_rules: Vec<WeatherRule>,
    /// Tip appended when no texture or weather rule produced output
    pub fallback: FallbackTip,
}

/// Base tips for one texture bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct TextureTips {
    /// Human-readable bucket name for display
    pub display_name: String,
    /// The bucket's base tips, appended in order
    pub base_tips: Vec<String>,
}

/// A weather rule: fires when ANY of its triggers matches the snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherRule {
    /// Stable rule identifier (e.g. "high_humidity_or_rain")
    pub id: String,
    /// Tip text appended when the rule fires
    pub tip: String,
    /// Triggers, OR-ed together
    pub triggers: Vec<Trigger>,
}

/// Default tip used when neither texture nor weather produced any output.
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackTip {
    pub tip: String,
}

/// One threshold or substring test against a weather snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct Trigger {
    pub metric: Metric,
    pub op: Comparison,
    /// Numeric threshold for `at_least` / `at_most` (inclusive)
    #[serde(default)]
    pub value: f64,
    /// Substring for `contains`, matched case-insensitively
    #[serde(default)]
    pub text: String,
}

/// Which snapshot field a trigger reads.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Humidity,
    Temperature,
    Condition,
}

/// How a trigger compares its metric.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    AtLeast,
    AtMost,
    Contains,
}

impl Trigger {
    /// Evaluate this trigger against a snapshot. Thresholds are inclusive;
    /// text matching is case-insensitive.
    pub fn matches(&self, weather: &WeatherSnapshot) -> bool {
        match (self.metric, self.op) {
            (Metric::Humidity, Comparison::AtLeast) => weather.humidity_percent >= self.value,
            (Metric::Humidity, Comparison::AtMost) => weather.humidity_percent <= self.value,
            (Metric::Temperature, Comparison::AtLeast) => weather.temperature_c >= self.value,
            (Metric::Temperature, Comparison::AtMost) => weather.temperature_c <= self.value,
            (Metric::Condition, Comparison::Contains) => weather
                .condition
                .to_lowercase()
                .contains(&self.text.to_lowercase()),
            // A numeric comparison against the condition text can never match
            (Metric::Condition, _) => false,
            // `contains` against a numeric metric can never match
            (_, Comparison::Contains) => false,
        }
    }
}

impl WeatherRule {
    pub fn fires(&self, weather: &WeatherSnapshot) -> bool {
        self.triggers.iter().any(|t| t.matches(weather))
    }
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// One textual recommendation line produced by the advisory generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryTip {
    /// What produced this tip: "texture:<bucket>", a weather rule id, or
    /// "fallback"
    pub source: String,
    pub text: String,
}

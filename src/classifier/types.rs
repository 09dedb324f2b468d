//! Classification payload types.
//!
//! `RawPrediction` mirrors the backend's loose payload shape, where most
//! fields may be missing and two of them historically shipped under
//! alternate keys. `ClassificationResult` is the canonical form the rest of
//! the engine consumes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::texture::TextureReading;

/// Raw classification payload as the backend sends it.
///
/// The label arrives under `hair_type` or `predicted_label`, the confidence
/// mapping under `probabilities` or `probs`. A payload-level `error` field
/// signals a backend-reported failure despite a successful transport.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPrediction {
    pub hair_type: Option<String>,
    pub predicted_label: Option<String>,
    pub probabilities: Option<HashMap<String, f64>>,
    pub probs: Option<HashMap<String, f64>>,
    #[serde(default)]
    pub products: Vec<RawProduct>,
    pub error: Option<String>,
}

/// One product match as the backend sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub hair_types: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub match_score: Option<f64>,
    #[serde(default)]
    pub description: String,
}

/// Canonical classification result.
///
/// Produced per analysis call and wholly replaced by the next call (or
/// cleared on error); never merged.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    /// Predicted hair-type label, `"Unknown"` when the backend sent none.
    pub hair_type: String,
    /// Per-label confidence, each value in [0, 1].
    pub probabilities: HashMap<String, f64>,
    /// Ordered product matches with resolved imagery.
    pub products: Vec<ProductMatch>,
    /// Texture bucket, classified once here and consumed by the advisory
    /// generator and the routine planner.
    pub texture: TextureReading,
}

/// A recommended product with its image reference resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ProductMatch {
    pub name: String,
    pub brand: String,
    pub hair_types: Option<Vec<String>>,
    pub description: String,
    /// Match strength on a 0-100 scale, when the backend scored it.
    pub match_score: Option<f64>,
    /// Renderable image source, when one could be resolved.
    pub resolved_image: Option<String>,
}

impl ClassificationResult {
    /// Confidence entries sorted by probability, highest first.
    pub fn ranked_probabilities(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .probabilities
            .iter()
            .map(|(label, p)| (label.as_str(), *p))
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{classify_label, HairTexture};

    #[test]
    fn test_raw_prediction_deserialize_alternate_keys() {
        let json = r#"{
            "predicted_label": "Curly",
            "probs": {"Curly": 0.8, "Wavy": 0.2}
        }"#;
        let raw: RawPrediction = serde_json::from_str(json).unwrap();
        assert_eq!(raw.predicted_label.as_deref(), Some("Curly"));
        assert!(raw.hair_type.is_none());
        assert!(raw.probabilities.is_none());
        assert_eq!(raw.probs.unwrap().len(), 2);
    }

    #[test]
    fn test_raw_prediction_deserialize_minimal() {
        let raw: RawPrediction = serde_json::from_str("{}").unwrap();
        assert!(raw.hair_type.is_none());
        assert!(raw.products.is_empty());
        assert!(raw.error.is_none());
    }

    #[test]
    fn test_raw_product_optional_fields() {
        let json = r#"{
            "name": "Castor Oil",
            "brand": "Native Child",
            "match_score": 92.5,
            "description": "Growth oil."
        }"#;
        let product: RawProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Castor Oil");
        assert!(product.hair_types.is_none());
        assert!(product.image_url.is_none());
        assert_eq!(product.match_score, Some(92.5));
    }

    #[test]
    fn test_ranked_probabilities_sorted_descending() {
        let mut probabilities = HashMap::new();
        probabilities.insert("Wavy".to_string(), 0.1);
        probabilities.insert("Curly".to_string(), 0.7);
        probabilities.insert("Straight".to_string(), 0.2);

        let result = ClassificationResult {
            hair_type: "Curly".to_string(),
            probabilities,
            products: vec![],
            texture: classify_label("Curly"),
        };

        let ranked = result.ranked_probabilities();
        assert_eq!(ranked[0].0, "Curly");
        assert_eq!(ranked[2].0, "Wavy");
        assert_eq!(result.texture.texture(), Some(HairTexture::Curly));
    }
}

//! Raw payload normalization.
//!
//! The backend's payload is lenient: alternate keys, missing fields, and
//! per-product image references that may or may not be usable. This module
//! turns it into the canonical `ClassificationResult` with all imagery
//! resolved.

use tracing::{info, warn};

use crate::error::TrichofyError;
use crate::resolver::{lookup_product_image, resolve_image_ref};
use crate::texture::classify_label;

use super::types::{ClassificationResult, ProductMatch, RawPrediction, RawProduct};

/// Label used when the backend supplies none.
const UNKNOWN_LABEL: &str = "Unknown";

/// Normalize a raw prediction payload into the canonical result.
///
/// Defaults: missing label becomes `"Unknown"`, missing confidence mapping
/// becomes empty. Each product's image is resolved with priority:
/// backend-supplied reference, then the bundled name lookup table, then none.
///
/// A payload-level `error` field wins over everything else and surfaces as
/// `BackendReportedError` with the backend's own message.
pub fn normalize_prediction(raw: RawPrediction) -> Result<ClassificationResult, TrichofyError> {
    if let Some(message) = raw.error {
        warn!("Backend reported a payload-level error: {}", message);
        return Err(TrichofyError::BackendReportedError(message));
    }

    let hair_type = first_present(raw.hair_type, raw.predicted_label)
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    let probabilities = raw
        .probabilities
        .or(raw.probs)
        .unwrap_or_default();

    let out_of_range = probabilities
        .iter()
        .filter(|(_, p)| !(0.0..=1.0).contains(*p))
        .count();
    if out_of_range > 0 {
        warn!(
            "{} probability value(s) outside [0, 1] for label '{}'",
            out_of_range, hair_type
        );
    }

    let products = raw.products.into_iter().map(normalize_product).collect();
    let texture = classify_label(&hair_type);

    info!(
        "Normalized prediction: label='{}', texture={:?}",
        hair_type, texture
    );

    Ok(ClassificationResult {
        hair_type,
        probabilities,
        products,
        texture,
    })
}

fn normalize_product(raw: RawProduct) -> ProductMatch {
    let from_backend = raw
        .image_url
        .as_deref()
        .and_then(resolve_image_ref);
    let resolved_image = from_backend.or_else(|| lookup_product_image(&raw.name));

    ProductMatch {
        name: raw.name,
        brand: raw.brand,
        hair_types: raw.hair_types,
        description: raw.description,
        match_score: raw.match_score,
        resolved_image,
    }
}

/// First of the two alternate-key values that is present and non-blank.
fn first_present(primary: Option<String>, secondary: Option<String>) -> Option<String> {
    primary
        .filter(|s| !s.trim().is_empty())
        .or_else(|| secondary.filter(|s| !s.trim().is_empty()))
}

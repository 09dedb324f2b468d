//! Provider product catalog.
//!
//! An in-memory, append-only store of manually submitted product entries.
//! Entries live only for the session: newest first, no update, no delete,
//! no persistence. `submit` is serialized behind a mutex so prepend ordering
//! holds even for a multi-client reimplementation.
//!
//! Category-specific details are a tagged variant with an explicit schema
//! rather than a free-form key/value bag, so missing or malformed category
//! fields are rejected at construction.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::TrichofyError;
use crate::resolver::{lookup_product_image, resolve_image_ref};

/// Hold strength for styler products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldLevel {
    Light,
    Medium,
    Strong,
}

/// Category-specific details, validated at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ProductCategory {
    Shampoo { sulfate_free: bool },
    Conditioner { leave_in: bool },
    Oil { key_actives: Vec<String> },
    Treatment { protein_based: bool },
    Styler { hold: HoldLevel },
}

impl ProductCategory {
    /// Build the tagged details for a category id from the submitted extras.
    ///
    /// Fails with `ValidationError` for an unknown category id or when a
    /// required field is missing or malformed.
    pub fn from_extras(
        category_id: &str,
        extras: &HashMap<String, String>,
    ) -> Result<Self, TrichofyError> {
        match category_id {
            "shampoo" => Ok(ProductCategory::Shampoo {
                sulfate_free: require_bool(extras, "sulfate_free", category_id)?,
            }),
            "conditioner" => Ok(ProductCategory::Conditioner {
                leave_in: require_bool(extras, "leave_in", category_id)?,
            }),
            "oil" => {
                let actives = parse_list(require_field(extras, "key_actives", category_id)?);
                if actives.is_empty() {
                    return Err(TrichofyError::ValidationError(
                        "List at least one key active for an oil.".to_string(),
                    ));
                }
                Ok(ProductCategory::Oil {
                    key_actives: actives,
                })
            }
            "treatment" => Ok(ProductCategory::Treatment {
                protein_based: require_bool(extras, "protein_based", category_id)?,
            }),
            "styler" => {
                let hold = match require_field(extras, "hold", category_id)?
                    .trim()
                    .to_lowercase()
                    .as_str()
                {
                    "light" => HoldLevel::Light,
                    "medium" => HoldLevel::Medium,
                    "strong" => HoldLevel::Strong,
                    other => {
                        return Err(TrichofyError::ValidationError(format!(
                            "Unknown hold level '{}'. Use light, medium or strong.",
                            other
                        )))
                    }
                };
                Ok(ProductCategory::Styler { hold })
            }
            other => Err(TrichofyError::ValidationError(format!(
                "Unknown product category '{}'.",
                other
            ))),
        }
    }

    /// Stable category identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ProductCategory::Shampoo { .. } => "shampoo",
            ProductCategory::Conditioner { .. } => "conditioner",
            ProductCategory::Oil { .. } => "oil",
            ProductCategory::Treatment { .. } => "treatment",
            ProductCategory::Styler { .. } => "styler",
        }
    }

    /// Human-readable category label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Shampoo { .. } => "Shampoo",
            ProductCategory::Conditioner { .. } => "Conditioner",
            ProductCategory::Oil { .. } => "Hair Oil",
            ProductCategory::Treatment { .. } => "Treatment",
            ProductCategory::Styler { .. } => "Styler",
        }
    }
}

/// Raw form fields of a provider submission.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFields {
    pub name: String,
    pub brand: String,
    /// Comma-separated target hair types, may be blank.
    pub hair_types: String,
    /// Image filename or URL, may be blank.
    pub image_ref: String,
    pub description: String,
}

/// A product record submitted through the provider form.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderEntry {
    pub name: String,
    pub brand: String,
    /// Never empty; defaults to `["All"]`.
    pub hair_types: Vec<String>,
    pub image_ref: Option<String>,
    pub description: String,
    #[serde(flatten)]
    pub category: ProductCategory,
    pub submitted_at: DateTime<Utc>,
}

/// Session-scoped provider catalog, newest entries first.
#[derive(Debug, Default)]
pub struct ProviderCatalog {
    entries: Mutex<Vec<ProviderEntry>>,
}

impl ProviderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a submission and prepend it to the catalog.
    ///
    /// Fails with `ValidationError` when no category is selected, when the
    /// name or brand is blank after trimming, or when the category's
    /// required extras are missing or malformed. The catalog is untouched
    /// on failure.
    pub fn submit(
        &self,
        fields: &SubmissionFields,
        category_id: Option<&str>,
        extras: &HashMap<String, String>,
    ) -> Result<ProviderEntry, TrichofyError> {
        let category_id = category_id.ok_or_else(|| {
            TrichofyError::ValidationError("Select a product category first.".to_string())
        })?;

        let name = fields.name.trim();
        let brand = fields.brand.trim();
        if name.is_empty() || brand.is_empty() {
            return Err(TrichofyError::ValidationError(
                "Please provide product name and brand.".to_string(),
            ));
        }

        let category = ProductCategory::from_extras(category_id, extras)?;

        let image_ref =
            resolve_image_ref(fields.image_ref.trim()).or_else(|| lookup_product_image(name));
        let description = match fields.description.trim() {
            "" => "No description provided.".to_string(),
            text => text.to_string(),
        };

        let entry = ProviderEntry {
            name: name.to_string(),
            brand: brand.to_string(),
            hair_types: parse_hair_types(&fields.hair_types),
            image_ref,
            description,
            category,
            submitted_at: Utc::now(),
        };

        let mut entries = self.entries.lock().unwrap();
        entries.insert(0, entry.clone());
        info!(
            "Registered provider product '{}' ({}); catalog now holds {}",
            entry.name,
            entry.category.label(),
            entries.len()
        );
        Ok(entry)
    }

    /// Read-only snapshot of the catalog, most recent first.
    pub fn list(&self) -> Vec<ProviderEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse a comma-separated hair-type field: trim each token, drop empties,
/// default to `["All"]` when nothing usable remains. Semicolons are accepted
/// as separators too.
pub fn parse_hair_types(raw: &str) -> Vec<String> {
    let tokens: Vec<String> = raw
        .replace(';', ",")
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        vec!["All".to_string()]
    } else {
        tokens
    }
}

fn require_field<'a>(
    extras: &'a HashMap<String, String>,
    key: &str,
    category: &str,
) -> Result<&'a str, TrichofyError> {
    extras
        .get(key)
        .map(|s| s.as_str())
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| {
            TrichofyError::ValidationError(format!(
                "Missing '{}' for category '{}'.",
                key, category
            ))
        })
}

fn require_bool(
    extras: &HashMap<String, String>,
    key: &str,
    category: &str,
) -> Result<bool, TrichofyError> {
    let raw = require_field(extras, key, category)?;
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(TrichofyError::ValidationError(format!(
            "Field '{}' must be yes or no, got '{}'.",
            key, other
        ))),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

//! TOML rule loading for the seasonal care engine.
//!
//! Provides two loading methods:
//! - `default_rules()` - Loads embedded rules compiled into the binary
//! - `load_rules(path)` - Loads custom rules from a file path

use anyhow::Result;
use std::path::Path;

use super::types::CareRules;

/// Default rules embedded in the binary at compile time.
/// These are loaded from `config/care_rules.toml`.
const DEFAULT_RULES: &str = include_str!("../../config/care_rules.toml");

/// Load care rules from a TOML file at the given path.
pub fn load_rules(path: &Path) -> Result<CareRules> {
    let content = std::fs::read_to_string(path)?;
    let config: CareRules = toml::from_str(&content)?;
    Ok(config)
}

/// Get the default rules embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_rules() -> CareRules {
    toml::from_str(DEFAULT_RULES).expect("embedded care_rules.toml must be valid TOML")
}

//! Trichofy advisory engine.
//!
//! Turns a hair-type classification and local weather into care guidance:
//! normalized classifier results with ranked products, seasonal tips from a
//! TOML rule table, a texture-specific weekly routine and a session-scoped
//! provider catalog.

pub mod advisor;
pub mod catalog;
pub mod classifier;
pub mod config;
pub mod error;
pub mod flow;
pub mod resolver;
pub mod session;
pub mod texture;
pub mod weather;

pub use advisor::{
    default_rules, load_rules, seasonal_tips, weekly_plan, AdvisoryTip, CareRules, RoutineBlock,
    RoutineIntensity,
};
pub use catalog::{HoldLevel, ProductCategory, ProviderCatalog, ProviderEntry, SubmissionFields};
pub use classifier::{ClassificationResult, ClassifierClient, ProductMatch};
pub use config::AppConfig;
pub use error::TrichofyError;
pub use flow::Flow;
pub use resolver::{lookup_product_image, resolve_image_ref};
pub use session::{AdvisorySession, PhotoSelection};
pub use texture::{classify_label, HairTexture, TextureReading, WordingClass};
pub use weather::{WeatherClient, WeatherSnapshot};

/// Install the global tracing subscriber. Honors `RUST_LOG` and defaults to
/// `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

//! Hair-type classification: raw backend payloads, normalization into the
//! canonical result, and the single-shot HTTP client.

pub mod client;
pub mod normalize;
pub mod types;

pub use client::ClassifierClient;
pub use normalize::normalize_prediction;
pub use types::{ClassificationResult, ProductMatch, RawPrediction, RawProduct};

//! Weather lookup: snapshot types and the single-shot HTTP client.

pub mod client;
pub mod types;

pub use client::WeatherClient;
pub use types::WeatherSnapshot;

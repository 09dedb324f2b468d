//! Single-shot HTTP client for the classification endpoint.

use std::time::Duration;

use reqwest::multipart;
use tracing::{error, info};

use crate::error::TrichofyError;

use super::normalize::normalize_prediction;
use super::types::{ClassificationResult, RawPrediction};

/// Client for the image classification endpoint.
///
/// One multipart POST per analysis, 30 second timeout, no automatic retry:
/// a failure leaves an error state that only a manual re-trigger clears.
pub struct ClassifierClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ClassifierClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("Trichofy/1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build reqwest client");

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Upload an image and return the normalized classification result.
    ///
    /// Transport failure or a non-success status maps to
    /// `BackendUnavailable`; a successful response whose payload carries an
    /// `error` field maps to `BackendReportedError`.
    pub async fn analyze(
        &self,
        image_bytes: Vec<u8>,
        file_name: &str,
    ) -> Result<ClassificationResult, TrichofyError> {
        info!(
            "Submitting image '{}' ({} bytes) to {}",
            file_name,
            image_bytes.len(),
            self.endpoint
        );

        let part = multipart::Part::bytes(image_bytes)
            .file_name(file_name.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| TrichofyError::BackendUnavailable(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Classification request failed: {}", e);
                TrichofyError::BackendUnavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Classification endpoint returned {}", status);
            return Err(TrichofyError::BackendUnavailable(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let raw: RawPrediction = response.json().await.map_err(|e| {
            error!("Classification response was not valid JSON: {}", e);
            TrichofyError::BackendUnavailable(e.to_string())
        })?;

        normalize_prediction(raw)
    }
}

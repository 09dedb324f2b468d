use thiserror::Error;

/// Error taxonomy for the advisory engine.
///
/// Every variant is handled at the call boundary and turned into a single
/// human-readable message; none propagate as panics and none are retried
/// automatically -- the user must re-trigger the action.
#[derive(Debug, Error)]
pub enum TrichofyError {
    /// An action was triggered without its required input (no photo
    /// selected, no city entered).
    #[error("No input selected")]
    InputMissing,

    /// Transport failure or non-success HTTP status from a backend.
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend answered successfully but reported an error in the payload.
    #[error("Backend reported an error: {0}")]
    BackendReportedError(String),

    /// A provider submission was rejected (missing category, blank required
    /// field, malformed category details).
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<TrichofyError> for String {
    fn from(err: TrichofyError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TrichofyError::BackendUnavailable("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));

        let err = TrichofyError::BackendReportedError("Invalid image file.".to_string());
        assert!(err.to_string().contains("Invalid image file."));

        let err = TrichofyError::ValidationError("name is required".to_string());
        assert!(err.to_string().contains("name is required"));
    }

    #[test]
    fn test_converts_to_string_for_boundary() {
        let msg: String = TrichofyError::InputMissing.into();
        assert_eq!(msg, "No input selected");
    }
}

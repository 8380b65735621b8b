//! Error types for the runtime adapter.

use thiserror::Error;

/// Result type for runtime-service operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur when talking to the runtime service.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Missing API token.
    #[error("Runtime API token not found. Set the ALSVID_RUNTIME_TOKEN environment variable.")]
    MissingToken,

    /// Missing instance identity.
    #[error("Runtime instance not found. Set the ALSVID_RUNTIME_INSTANCE environment variable.")]
    MissingInstance,

    /// Token could not be used in a request header.
    #[error("Invalid runtime API token")]
    InvalidToken,

    /// Backend identifier did not resolve to a device.
    #[error("Unknown backend: {0}")]
    UnknownBackend(String),

    /// Service accepted the request but returned no job id.
    #[error("Runtime service returned no job id for submission")]
    NoJobId,

    /// Job not found.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// Job failed on the service side.
    #[error("Job failed: {0}")]
    JobFailed(String),

    /// API returned an error payload.
    #[error("Runtime API error: {message}")]
    Api {
        /// Error code from the API, if any.
        code: Option<String>,
        /// Error message.
        message: String,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<RuntimeError> for alsvid_hal::HalError {
    fn from(e: RuntimeError) -> Self {
        use alsvid_hal::HalError;
        match e {
            RuntimeError::MissingToken
            | RuntimeError::MissingInstance
            | RuntimeError::InvalidToken => HalError::AuthenticationFailed(e.to_string()),
            RuntimeError::UnknownBackend(name) => HalError::BackendUnavailable(name),
            RuntimeError::NoJobId => HalError::SubmissionFailed(e.to_string()),
            RuntimeError::JobNotFound(id) => HalError::JobNotFound(id),
            RuntimeError::JobFailed(msg) => HalError::JobFailed(msg),
            RuntimeError::Http(e) => HalError::Network(e),
            RuntimeError::Json(e) => HalError::Serialization(e),
            RuntimeError::Api { .. } => HalError::Backend(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_hal::HalError;

    #[test]
    fn test_no_job_id_maps_to_submission_failure() {
        let hal: HalError = RuntimeError::NoJobId.into();
        assert!(matches!(hal, HalError::SubmissionFailed(_)));
    }

    #[test]
    fn test_credential_errors_map_to_auth() {
        for e in [RuntimeError::MissingToken, RuntimeError::MissingInstance] {
            let hal: HalError = e.into();
            assert!(matches!(hal, HalError::AuthenticationFailed(_)));
        }
    }

    #[test]
    fn test_unknown_backend_maps_to_unavailable() {
        let hal: HalError = RuntimeError::UnknownBackend("nope".into()).into();
        assert!(matches!(hal, HalError::BackendUnavailable(_)));
    }
}

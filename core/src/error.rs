//! Error types for the fitting request.
//!
//! The widget treats every variant the same way ("request failed"):
//! the error is logged and the held result is left untouched. The
//! variants only exist so the log line says what went wrong.

use thiserror::Error;

// =============================================================================
// Fit Request Errors
// =============================================================================

/// A failed call to the fitting service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Could not build or send the request, or the connection dropped.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body is not a valid fit result.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The configured request timeout elapsed.
    #[error("Request timed out")]
    Timeout,
}

impl From<serde_json::Error> for FitError {
    fn from(err: serde_json::Error) -> Self {
        FitError::Decode(err.to_string())
    }
}

/// Result type for fitting requests.
pub type FitResponse<T> = Result<T, FitError>;

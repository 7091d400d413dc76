//! Error types for the native client.
//!
//! - [`FitError`] - a failed fitting request (re-exported from `linreg-core`)
//! - [`ConfigError`] - invalid configuration values
//! - [`ExportError`] - writing the rendered page or the decoded plot
//! - [`ClientError`] - top-level CLI errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

pub use linreg_core::FitError;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Invalid configuration from the environment or the command line.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL is not an http(s) URL.
    #[error("Invalid base URL '{0}': expected http:// or https://")]
    InvalidBaseUrl(String),

    /// The timeout is not a positive number of seconds.
    #[error("Invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),

    /// Unknown apply policy name.
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors while exporting a fit result to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The image field is not valid base64.
    #[error("Image is not valid base64: {0}")]
    InvalidImage(#[from] base64::DecodeError),

    /// Failed to write the output file.
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),
}

// =============================================================================
// Client Errors (top-level)
// =============================================================================

/// Top-level errors returned by CLI commands.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to read the selected file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Fitting request failed.
    #[error("Request failed: {0}")]
    Fit(#[from] FitError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Export error.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response was dropped instead of being applied.
    #[error("Response was not applied: {0}")]
    NotApplied(String),

    /// The upload task panicked or was aborted.
    #[error("Upload task failed: {0}")]
    Task(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for CLI operations.
pub type ClientResult<T> = Result<T, ClientError>;

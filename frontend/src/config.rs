//! Application configuration.
//!
//! Centralized configuration for the upload widget. The component takes the
//! base URL as a prop, so these are only the defaults used by [`crate::App`].

/// Base URL of the linear-regression service.
pub const BACKEND_URL: &str = linreg_core::DEFAULT_BASE_URL;

/// Path of the fitting endpoint under [`BACKEND_URL`].
pub const FIT_ENDPOINT: &str = linreg_core::FIT_ENDPOINT;

//! # linreg-core - state and rendering model for the regression upload widget
//!
//! The widget uploads one dataset file to a linear-regression service and
//! shows the returned plot plus slope, intercept and r².
//!
//! ```text
//! ┌─────────────┐  begin()   ┌─────────────┐  POST multipart  ┌──────────────┐
//! │ file picked │──────────▶│ UploadState │─────────────────▶│ fit service  │
//! └─────────────┘            │ (one result)│◀─────────────────│ (remote)     │
//!                            └──────┬──────┘  resolve()       └──────────────┘
//!                                   ▼
//!                            ┌─────────────┐
//!                            │ ResultView  │
//!                            └─────────────┘
//! ```
//!
//! This crate does no I/O. The browser frontend and the native client each
//! supply their own transport and drive [`UploadState`] from it.
//!
//! ## Modules
//!
//! - [`types`] - Wire format (`FitResult`)
//! - [`error`] - Request failure taxonomy
//! - [`state`] - Result cell, request lifecycle, apply policy
//! - [`view`] - Render model and HTML rendering

pub mod error;
pub mod state;
pub mod types;
pub mod view;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{FitError, FitResponse};
pub use state::{ApplyPolicy, RequestStatus, Resolution, Ticket, UploadState};
pub use types::{format_coefficient, FitResult, FILE_FIELD, PNG_DATA_URI_PREFIX};
pub use view::{render_html, render_page, FieldView, ResultView, TITLE};

/// Path of the fitting endpoint, relative to the service base URL.
pub const FIT_ENDPOINT: &str = "/linearregression/";

/// Base URL of the fitting service when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Join a base URL and the fitting endpoint.
pub fn fit_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), FIT_ENDPOINT)
}

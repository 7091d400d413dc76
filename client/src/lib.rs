//! # linreg-client - native client for the linear-regression upload widget
//!
//! Uploads a dataset file to a linear-regression service and keeps the
//! returned fit (plot, slope, intercept, r²) in an [`UploadWidget`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐     ┌─────────────┐
//! │ SelectedFile│────▶│ UploadWidget │────▶│ HttpFitService│────▶│ fit service │
//! │ (from disk) │     │ (state cell) │◀────│ (multipart)   │◀────│ (remote)    │
//! └─────────────┘     └──────┬───────┘     └───────────────┘     └─────────────┘
//!                            ▼
//!                     HTML page / PNG / stdout
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use linreg_client::{ClientConfig, SelectedFile, UploadWidget};
//!
//! #[tokio::main]
//! async fn main() {
//!     let widget = UploadWidget::from_config(&ClientConfig::default());
//!     let file = SelectedFile::from_path("data.csv").await.unwrap();
//!     widget.handle_file_selected(file).await.unwrap();
//!     println!("{}", widget.render_html());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Environment-driven configuration
//! - [`api`] - HTTP transport, request types, diagnostic log channel
//! - [`widget`] - Tokio-driven upload widget
//! - [`export`] - HTML page and PNG output

// Core modules
pub mod config;
pub mod error;

// HTTP API
pub mod api;

// Widget
pub mod widget;

// Output
pub mod export;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ClientError, ClientResult, ConfigError, ExportError, FitError};

// =============================================================================
// Re-exports - Config
// =============================================================================

pub use config::{parse_timeout, ClientConfig};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::{FitService, HttpFitService, LogBroadcaster, LogEntry, LogLevel, SelectedFile};

// =============================================================================
// Re-exports - Widget
// =============================================================================

pub use widget::UploadWidget;

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{decode_image, format_fit, write_image, write_page};

// =============================================================================
// Re-exports - Core model
// =============================================================================

pub use linreg_core::{
    render_html, render_page, ApplyPolicy, FitResult, RequestStatus, Resolution, ResultView,
};

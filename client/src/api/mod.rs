//! HTTP API module.
//!
//! This module provides the transport to the fitting service, the
//! request-side types, and the diagnostic log channel.

pub mod client;
pub mod logs;
pub mod types;

pub use client::{FitService, HttpFitService};
pub use logs::*;
pub use types::*;

//! Backend services.
//!
//! - [`upload`] - dataset upload to the linear-regression service

pub mod upload;

pub use upload::*;

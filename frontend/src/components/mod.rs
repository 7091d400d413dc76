//! UI Components for the upload widget.
//!
//! - [`FileUploader`] - file picker, upload, and result state
//! - [`FitResultView`] - plot and coefficients of a fit

mod result;
mod uploader;

pub use result::*;
pub use uploader::*;

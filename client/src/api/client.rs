//! HTTP transport for the fitting service.
//!
//! # Request
//!
//! | Method | Path                  | Body                                   |
//! |--------|-----------------------|----------------------------------------|
//! | POST   | `/linearregression/`  | multipart/form-data, one part `file`   |
//!
//! The response body is a JSON [`FitResult`]. Any transport error, non-2xx
//! status or malformed body is reported as a [`FitError`]; nothing is
//! retried.

use futures::future::{BoxFuture, FutureExt};
use reqwest::multipart::{Form, Part};
use std::time::Duration;

use linreg_core::FILE_FIELD;

use super::types::{FitResult, SelectedFile};
use crate::config::ClientConfig;
use crate::error::FitError;

/// Something that can fit a line through an uploaded dataset.
///
/// [`HttpFitService`] is the real implementation; tests plug in fakes
/// that resolve in a scripted order.
pub trait FitService: Send + Sync + 'static {
    fn fit(&self, file: SelectedFile) -> BoxFuture<'static, Result<FitResult, FitError>>;
}

/// Fitting service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFitService {
    http: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpFitService {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint(),
            timeout: config.timeout,
        }
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload one file and parse the fit result.
    pub async fn upload(&self, file: SelectedFile) -> Result<FitResult, FitError> {
        let mut part = Part::bytes(file.bytes).file_name(file.name);
        if let Some(mime) = file.mime {
            part = part
                .mime_str(&mime)
                .map_err(|e| FitError::Network(format!("Invalid MIME type '{}': {}", mime, e)))?;
        }
        let form = Form::new().part(FILE_FIELD, part);

        // reqwest sets `multipart/form-data; boundary=...` itself
        let mut request = self.http.post(&self.endpoint).multipart(form);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(transport_error)?;
        FitResult::from_json(&body)
    }
}

impl FitService for HttpFitService {
    fn fit(&self, file: SelectedFile) -> BoxFuture<'static, Result<FitResult, FitError>> {
        let service = self.clone();
        async move { service.upload(file).await }.boxed()
    }
}

fn transport_error(err: reqwest::Error) -> FitError {
    if err.is_timeout() {
        FitError::Timeout
    } else {
        FitError::Network(err.to_string())
    }
}

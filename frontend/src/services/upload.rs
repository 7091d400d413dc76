//! HTTP service uploading a dataset file to the fitting endpoint.

use gloo_net::http::Request;
use linreg_core::{fit_url, FitError, FitResult, FILE_FIELD};
use web_sys::{File, FormData};

/// Upload a file and parse the fit result.
///
/// The browser sets `multipart/form-data` with its boundary from the
/// `FormData` body; setting the header by hand would drop the boundary.
pub async fn upload_dataset(file: File, base_url: &str) -> Result<FitResult, FitError> {
    let form_data = FormData::new()
        .map_err(|e| FitError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(FILE_FIELD, &file, &file.name())
        .map_err(|e| FitError::Network(format!("Failed to append file: {:?}", e)))?;

    let url = fit_url(base_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| FitError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| FitError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(FitError::Status {
            status: response.status(),
            body,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FitError::Network(e.to_string()))?;
    FitResult::from_json(&body)
}

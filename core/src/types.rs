//! Wire types exchanged with the fitting service.

use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// MIME prefix used to embed the returned plot.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Name of the single multipart part carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Response of the linear-regression endpoint.
///
/// Field names match the service's JSON exactly (`r_squared` stays snake_case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Base64-encoded PNG of the data points and fitted line
    pub image: String,
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl FitResult {
    /// Parse a raw response body.
    pub fn from_json(body: &str) -> Result<Self, FitError> {
        Ok(serde_json::from_str(body)?)
    }

    /// `data:` URI suitable for an `<img src>`.
    pub fn image_data_uri(&self) -> String {
        format!("{}{}", PNG_DATA_URI_PREFIX, self.image)
    }
}

/// Display a coefficient without rounding.
///
/// Uses the shortest representation that round-trips, and always keeps a
/// fractional part so `2.0` is shown as `2.0` rather than `2`.
pub fn format_coefficient(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "image": "iVBORw0KGgo=",
            "slope": 2.0,
            "intercept": 1.0,
            "r_squared": 0.95
        }"#;

        let result = FitResult::from_json(json).unwrap();
        assert_eq!(result.image, "iVBORw0KGgo=");
        assert_eq!(result.slope, 2.0);
        assert_eq!(result.intercept, 1.0);
        assert_eq!(result.r_squared, 0.95);
    }

    #[test]
    fn test_integer_coefficients_accepted() {
        let json = r#"{"image": "", "slope": 3, "intercept": -1, "r_squared": 1}"#;
        let result = FitResult::from_json(json).unwrap();
        assert_eq!(result.slope, 3.0);
        assert_eq!(result.intercept, -1.0);
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let json = r#"{"image": "abc", "slope": 2.0, "intercept": 1.0}"#;
        let err = FitResult::from_json(json).unwrap_err();
        assert!(matches!(err, FitError::Decode(_)));
    }

    #[test]
    fn test_image_data_uri() {
        let result = FitResult {
            image: "iVBORw0".into(),
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
        };
        assert_eq!(result.image_data_uri(), "data:image/png;base64,iVBORw0");
    }

    #[test]
    fn test_format_coefficient_verbatim() {
        assert_eq!(format_coefficient(2.0), "2.0");
        assert_eq!(format_coefficient(1.0), "1.0");
        assert_eq!(format_coefficient(0.95), "0.95");
        assert_eq!(format_coefficient(-0.3333333333333333), "-0.3333333333333333");
    }
}

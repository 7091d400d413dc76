//! Writing fit results to disk.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::fs;
use std::path::Path;

use linreg_core::{render_page, FitResult, ResultView};

use crate::error::ExportResult;

/// Plain-text summary, one coefficient per line.
pub fn format_fit(result: &FitResult) -> String {
    ResultView::from(result)
        .fields
        .iter()
        .map(|field| field.text())
        .collect::<Vec<_>>()
        .join("\n")
}

/// PNG bytes of the returned plot.
pub fn decode_image(result: &FitResult) -> ExportResult<Vec<u8>> {
    Ok(STANDARD.decode(result.image.trim())?)
}

/// Write the decoded plot to `path`.
pub fn write_image(result: &FitResult, path: &Path) -> ExportResult<()> {
    let png = decode_image(result)?;
    fs::write(path, png)?;
    Ok(())
}

/// Write a standalone HTML page of the widget to `path`.
pub fn write_page(result: Option<&FitResult>, path: &Path) -> ExportResult<()> {
    fs::write(path, render_page(result))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use tempfile::tempdir;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn result_with_image(image: String) -> FitResult {
        FitResult {
            image,
            slope: 2.0,
            intercept: 1.0,
            r_squared: 0.95,
        }
    }

    #[test]
    fn test_format_fit() {
        let result = result_with_image(String::new());
        assert_eq!(
            format_fit(&result),
            "slope is: 2.0\nintercept is: 1.0\nr_squared is: 0.95"
        );
    }

    #[test]
    fn test_decode_png_signature() {
        let result = result_with_image(STANDARD.encode(PNG_SIGNATURE));
        assert_eq!(decode_image(&result).unwrap(), PNG_SIGNATURE.to_vec());
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let result = result_with_image("%%%".into());
        assert!(matches!(decode_image(&result), Err(ExportError::InvalidImage(_))));
    }

    #[test]
    fn test_write_image_and_page() {
        let dir = tempdir().unwrap();
        let result = result_with_image(STANDARD.encode(PNG_SIGNATURE));

        let png_path = dir.path().join("fit.png");
        write_image(&result, &png_path).unwrap();
        assert_eq!(fs::read(&png_path).unwrap(), PNG_SIGNATURE.to_vec());

        let html_path = dir.path().join("fit.html");
        write_page(Some(&result), &html_path).unwrap();
        let html = fs::read_to_string(&html_path).unwrap();
        assert!(html.contains("<p>slope is: 2.0</p>"));
    }
}

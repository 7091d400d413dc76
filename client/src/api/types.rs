//! Request-side types for the fitting API.
//!
//! The response type, [`FitResult`], lives in `linreg-core` so the browser
//! frontend parses the exact same shape.

use std::io;
use std::path::Path;

pub use linreg_core::FitResult;

/// A file picked for upload.
///
/// Lives only until it is turned into a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    /// File name sent as the part's `filename`
    pub name: String,
    /// Raw content, sent unmodified
    pub bytes: Vec<u8>,
    /// Optional MIME type for the part
    pub mime: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk, keeping its file name.
    pub async fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self::new(name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_from_path_keeps_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"x,y\n1,3\n2,5\n").unwrap();

        let selected = SelectedFile::from_path(&path).await.unwrap();
        assert_eq!(selected.name, "data.csv");
        assert_eq!(selected.bytes, b"x,y\n1,3\n2,5\n");
        assert_eq!(selected.mime, None);
        assert_eq!(selected.len(), 12);
    }

    #[tokio::test]
    async fn test_from_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = SelectedFile::from_path(dir.path().join("missing.csv")).await;
        assert!(result.is_err());
    }
}

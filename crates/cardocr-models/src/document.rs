//! Selected document images.

use std::fmt;

use thiserror::Error;

/// Errors raised while constructing a [`DocumentImage`].
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("selected file is empty: {0}")]
    EmptyPayload(String),
}

/// A file the user selected for one document side.
///
/// Holds the raw bytes together with the metadata the OCR service needs to
/// receive them as a multipart part. The file picker restricts selection to
/// image types, but that filter is advisory: [`DocumentImage::is_image`]
/// reports the mismatch and nothing rejects it.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentImage {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl DocumentImage {
    /// Create an image from raw bytes.
    ///
    /// Rejects empty payloads; a selected file must be a non-null blob.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let file_name = file_name.into();
        if bytes.is_empty() {
            return Err(ImageError::EmptyPayload(file_name));
        }
        Ok(Self {
            file_name,
            content_type: content_type.into(),
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the declared content type is an image type.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

impl fmt::Debug for DocumentImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

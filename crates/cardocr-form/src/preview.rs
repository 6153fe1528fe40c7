//! Preview handles for selected images.
//!
//! A preview handle is the local stand-in for a browser object URL: the
//! selected bytes are written to a named temp file so a rendering surface
//! can read them without re-reading the selected file. The file lives
//! exactly as long as the handle; dropping the handle deletes it.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use cardocr_models::DocumentImage;

/// Revocable reference to a selected image's bytes.
///
/// Handles are a scarce resource: a slot holds at most one at a time and
/// releases the old one before creating a replacement.
#[derive(Debug)]
pub struct PreviewHandle {
    file: NamedTempFile,
}

impl PreviewHandle {
    /// Write the image's bytes to a fresh temp file and return its handle.
    pub fn create(image: &DocumentImage) -> std::io::Result<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(image.bytes())?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Path a rendering surface can read the bytes from.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

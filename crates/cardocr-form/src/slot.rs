//! Upload slots.

use tracing::warn;

use cardocr_models::{DocumentImage, DocumentSide};

use crate::preview::PreviewHandle;

/// Holder for one side's selected image and its preview handle.
#[derive(Debug)]
pub struct UploadSlot {
    side: DocumentSide,
    image: Option<DocumentImage>,
    preview: Option<PreviewHandle>,
}

impl UploadSlot {
    pub fn new(side: DocumentSide) -> Self {
        Self {
            side,
            image: None,
            preview: None,
        }
    }

    pub fn side(&self) -> DocumentSide {
        self.side
    }

    pub fn image(&self) -> Option<&DocumentImage> {
        self.image.as_ref()
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn is_filled(&self) -> bool {
        self.image.is_some()
    }

    /// Replace the slot's image.
    ///
    /// The previous preview handle is released before the new one is
    /// created; a slot never holds two live handles. Re-selecting the same
    /// file is allowed and behaves like any other replacement.
    pub fn select(&mut self, image: DocumentImage) -> std::io::Result<()> {
        if !image.is_image() {
            warn!(
                side = %self.side,
                content_type = image.content_type(),
                "Selected file is not an image"
            );
        }

        self.preview = None;
        self.preview = Some(PreviewHandle::create(&image)?);
        self.image = Some(image);
        Ok(())
    }

    /// Return the slot to empty, releasing any preview handle.
    pub fn clear(&mut self) {
        self.preview = None;
        self.image = None;
    }
}

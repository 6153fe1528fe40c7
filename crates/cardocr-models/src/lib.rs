//! Shared data models for the cardocr client.
//!
//! This crate provides the types passed between the form controller and the
//! OCR service client:
//! - Document sides (the two fixed upload slots)
//! - Selected document images
//! - The opaque scan payload returned by the service

pub mod document;
pub mod scan;
pub mod side;

// Re-export common types
pub use document::{DocumentImage, ImageError};
pub use scan::OcrScan;
pub use side::DocumentSide;

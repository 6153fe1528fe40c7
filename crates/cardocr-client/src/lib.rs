//! Client for the remote OCR service.
//!
//! The service receives both sides of an identity document as one
//! multipart request and answers with a JSON scan. This crate owns the wire
//! contract: part names, the response envelope, and failure normalization.
//! OCR itself happens on the remote side; nothing here interprets the scan.

pub mod client;
pub mod config;
pub mod error;

pub use client::OcrClient;
pub use config::OcrClientConfig;
pub use error::{ClientResult, OcrClientError};

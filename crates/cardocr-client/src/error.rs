//! OCR client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, OcrClientError>;

/// Failure of a single OCR request.
///
/// Variants keep enough detail for diagnostics; user-facing layers collapse
/// every one of them into the same generic notice, so callers should log the
/// error rather than branch on it.
#[derive(Debug, Error)]
pub enum OcrClientError {
    #[error("OCR service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("invalid OCR response: {0}")]
    InvalidResponse(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OcrClientError {
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}

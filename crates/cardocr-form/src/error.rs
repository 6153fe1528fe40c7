//! Form error types.

use thiserror::Error;

pub type FormResult<T> = Result<T, FormError>;

/// Errors raised by form operations other than submission.
///
/// Submission outcomes are reported as [`crate::Notice`] values instead;
/// they are user-facing state, not process errors.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to create preview: {0}")]
    Preview(#[from] std::io::Error),
}

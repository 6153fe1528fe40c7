//! Upload-form controller for document OCR submission.
//!
//! Models the one interaction of the app: pick an image for each side of a
//! document, submit both to the OCR service, show the scan or a notice.
//! State lives in [`OcrForm`]; the network sits behind the [`OcrBackend`]
//! seam so the whole flow is testable without a service.

pub mod backend;
pub mod error;
pub mod form;
pub mod preview;
pub mod slot;

pub use backend::OcrBackend;
pub use error::{FormError, FormResult};
pub use form::{Notice, OcrForm, SubmitPhase};
pub use preview::PreviewHandle;
pub use slot::UploadSlot;

//! Seam between the form and the network.

use std::future::Future;

use cardocr_client::{ClientResult, OcrClient};
use cardocr_models::{DocumentImage, OcrScan};

/// OCR submission backend.
///
/// [`OcrClient`] is the production implementation; tests substitute stubs
/// to count calls and force outcomes.
pub trait OcrBackend {
    fn run_ocr(
        &self,
        front: &DocumentImage,
        back: &DocumentImage,
    ) -> impl Future<Output = ClientResult<OcrScan>> + Send;
}

impl OcrBackend for OcrClient {
    fn run_ocr(
        &self,
        front: &DocumentImage,
        back: &DocumentImage,
    ) -> impl Future<Output = ClientResult<OcrScan>> + Send {
        OcrClient::run_ocr(self, front, back)
    }
}

//! Form controller state machine.

use thiserror::Error;
use tracing::warn;

use cardocr_models::{DocumentImage, DocumentSide, OcrScan};

use crate::backend::OcrBackend;
use crate::error::FormResult;
use crate::slot::UploadSlot;

/// Submission lifecycle.
///
/// One submission runs `Idle → Submitting → Succeeded | Failed`; both
/// outcomes accept a new submission immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    /// True while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }
}

/// User-visible notices, shown as blocking alerts.
///
/// Every request failure maps to [`Notice::RequestFailed`] regardless of
/// cause; a 500 and an unreachable host read the same to the user. The
/// distinction lives in the log only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Notice {
    /// One or both sides missing at submit time; no request was sent.
    #[error("Please upload both front and back images!")]
    MissingSides,

    /// The OCR request failed.
    #[error("OCR failed. Try again!")]
    RequestFailed,

    /// A submission is already outstanding.
    #[error("A submission is already in progress")]
    InFlight,
}

/// State of the upload page: two slots, the submission phase, the last
/// scan, and the current notice.
///
/// Dropping the form releases any outstanding preview handles.
pub struct OcrForm<B> {
    backend: B,
    front: UploadSlot,
    back: UploadSlot,
    phase: SubmitPhase,
    scan: Option<OcrScan>,
    notice: Option<Notice>,
}

impl<B: OcrBackend> OcrForm<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            front: UploadSlot::new(DocumentSide::Front),
            back: UploadSlot::new(DocumentSide::Back),
            phase: SubmitPhase::default(),
            scan: None,
            notice: None,
        }
    }

    /// Replace the image selected for `side`.
    pub fn select(&mut self, side: DocumentSide, image: DocumentImage) -> FormResult<()> {
        self.slot_mut(side).select(image)?;
        Ok(())
    }

    pub fn slot(&self, side: DocumentSide) -> &UploadSlot {
        match side {
            DocumentSide::Front => &self.front,
            DocumentSide::Back => &self.back,
        }
    }

    fn slot_mut(&mut self, side: DocumentSide) -> &mut UploadSlot {
        match side {
            DocumentSide::Front => &mut self.front,
            DocumentSide::Back => &mut self.back,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Enabled state of the submit control: both sides chosen and no
    /// request outstanding.
    pub fn can_submit(&self) -> bool {
        self.front.is_filled() && self.back.is_filled() && !self.is_loading()
    }

    /// The last successful scan, if any.
    pub fn scan(&self) -> Option<&OcrScan> {
        self.scan.as_ref()
    }

    /// The notice currently shown to the user, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Submit both sides to the OCR backend.
    ///
    /// With a request already outstanding, or with either slot empty, no
    /// network call happens and the returned notice says why. Otherwise the
    /// form is loading for exactly the duration of the request; the flag
    /// clears on both outcomes. A failed request leaves any earlier scan in
    /// place.
    pub async fn submit(&mut self) -> Result<&OcrScan, Notice> {
        if self.is_loading() {
            return Err(Notice::InFlight);
        }

        let (front, back) = match (self.front.image(), self.back.image()) {
            (Some(front), Some(back)) => (front.clone(), back.clone()),
            _ => {
                self.notice = Some(Notice::MissingSides);
                return Err(Notice::MissingSides);
            }
        };

        self.phase = SubmitPhase::Submitting;
        self.notice = None;

        let outcome = self.backend.run_ocr(&front, &back).await;

        // Loading ends here on both outcomes
        self.phase = if outcome.is_ok() {
            SubmitPhase::Succeeded
        } else {
            SubmitPhase::Failed
        };

        match outcome {
            Ok(scan) => Ok(&*self.scan.insert(scan)),
            Err(err) => {
                warn!(error = %err, "OCR request failed");
                self.notice = Some(Notice::RequestFailed);
                Err(Notice::RequestFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use serde_json::{json, Value};

    use cardocr_client::{ClientResult, OcrClientError};

    /// Backend stub with scripted outcomes and a call counter.
    ///
    /// Panics on a call it has no outcome for, so tests asserting "no
    /// network call" fail loudly if one happens.
    struct StubBackend {
        calls: AtomicUsize,
        outcomes: Mutex<VecDeque<Result<Value, ()>>>,
    }

    impl StubBackend {
        fn with_outcomes(outcomes: Vec<Result<Value, ()>>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                outcomes: Mutex::new(outcomes.into()),
            }
        }

        fn ok(value: Value) -> Self {
            Self::with_outcomes(vec![Ok(value)])
        }

        fn failing() -> Self {
            Self::with_outcomes(vec![Err(())])
        }

        fn unreachable() -> Self {
            Self::with_outcomes(Vec::new())
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl OcrBackend for &StubBackend {
        fn run_ocr(
            &self,
            _front: &DocumentImage,
            _back: &DocumentImage,
        ) -> impl Future<Output = ClientResult<OcrScan>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let outcome = self
                .outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected backend call");
            async move {
                match outcome {
                    Ok(value) => Ok(OcrScan::new(value)),
                    Err(()) => Err(OcrClientError::invalid_response("stub failure")),
                }
            }
        }
    }

    fn image(name: &str, bytes: &[u8]) -> DocumentImage {
        DocumentImage::new(name, "image/jpeg", bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_submit_with_no_files_sends_nothing() {
        let backend = StubBackend::unreachable();
        let mut form = OcrForm::new(&backend);

        let err = form.submit().await.unwrap_err();

        assert_eq!(err, Notice::MissingSides);
        assert_eq!(backend.calls(), 0);
        assert_eq!(form.notice(), Some(Notice::MissingSides));
        assert!(!form.is_loading());
    }

    #[tokio::test]
    async fn test_submit_with_one_file_sends_nothing() {
        let backend = StubBackend::unreachable();
        let mut form = OcrForm::new(&backend);
        form.select(DocumentSide::Front, image("front.jpg", b"f"))
            .unwrap();

        let err = form.submit().await.unwrap_err();

        assert_eq!(err, Notice::MissingSides);
        assert_eq!(backend.calls(), 0);
        assert!(!form.can_submit());
    }

    #[tokio::test]
    async fn test_successful_submit_stores_scan() {
        let backend = StubBackend::ok(json!({"docType": "ID", "fields": {"name": "Jane Doe"}}));
        let mut form = OcrForm::new(&backend);
        form.select(DocumentSide::Front, image("front.jpg", &[0u8; 10 * 1024]))
            .unwrap();
        form.select(DocumentSide::Back, image("back.jpg", &[1u8; 12 * 1024]))
            .unwrap();

        let scan = form.submit().await.unwrap();
        assert_eq!(
            scan.as_value(),
            &json!({"docType": "ID", "fields": {"name": "Jane Doe"}})
        );

        assert_eq!(backend.calls(), 1);
        assert!(!form.is_loading());
        assert_eq!(form.phase(), SubmitPhase::Succeeded);
        assert_eq!(form.notice(), None);
        // Immediately resubmittable
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_failed_submit_surfaces_generic_notice() {
        let backend = StubBackend::failing();
        let mut form = OcrForm::new(&backend);
        form.select(DocumentSide::Front, image("front.jpg", b"f"))
            .unwrap();
        form.select(DocumentSide::Back, image("back.jpg", b"b"))
            .unwrap();

        let err = form.submit().await.unwrap_err();

        assert_eq!(err, Notice::RequestFailed);
        assert!(form.scan().is_none());
        assert_eq!(form.notice(), Some(Notice::RequestFailed));
        assert!(!form.is_loading());
        assert_eq!(form.phase(), SubmitPhase::Failed);
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_failure_keeps_last_scan() {
        let backend =
            StubBackend::with_outcomes(vec![Ok(json!({"name": "Jane Doe"})), Err(())]);
        let mut form = OcrForm::new(&backend);
        form.select(DocumentSide::Front, image("front.jpg", b"f"))
            .unwrap();
        form.select(DocumentSide::Back, image("back.jpg", b"b"))
            .unwrap();

        form.submit().await.unwrap();
        let _ = form.submit().await.unwrap_err();

        // The failed attempt discarded nothing already shown
        assert_eq!(form.scan().unwrap().as_value(), &json!({"name": "Jane Doe"}));
        assert_eq!(form.notice(), Some(Notice::RequestFailed));
    }

    #[tokio::test]
    async fn test_can_submit_requires_both_sides() {
        let backend = StubBackend::unreachable();
        let mut form = OcrForm::new(&backend);
        assert!(!form.can_submit());

        form.select(DocumentSide::Front, image("front.jpg", b"f"))
            .unwrap();
        assert!(!form.can_submit());

        form.select(DocumentSide::Back, image("back.jpg", b"b"))
            .unwrap();
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_drop_releases_preview_handles() {
        let backend = StubBackend::unreachable();
        let mut form = OcrForm::new(&backend);
        form.select(DocumentSide::Front, image("front.jpg", b"f"))
            .unwrap();
        form.select(DocumentSide::Back, image("back.jpg", b"b"))
            .unwrap();

        let front_path = form
            .slot(DocumentSide::Front)
            .preview()
            .unwrap()
            .path()
            .to_path_buf();
        let back_path = form
            .slot(DocumentSide::Back)
            .preview()
            .unwrap()
            .path()
            .to_path_buf();

        drop(form);
        assert!(!front_path.exists());
        assert!(!back_path.exists());
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(
            Notice::MissingSides.to_string(),
            "Please upload both front and back images!"
        );
        assert_eq!(Notice::RequestFailed.to_string(), "OCR failed. Try again!");
    }
}

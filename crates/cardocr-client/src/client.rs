//! OCR service HTTP client.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use cardocr_models::{DocumentImage, DocumentSide, OcrScan};

use crate::config::OcrClientConfig;
use crate::error::{ClientResult, OcrClientError};

/// Client for the remote OCR service.
///
/// One submission is one fire-and-forget request: no retries, no timeout,
/// no streaming. Callers decide whether and when to resubmit.
pub struct OcrClient {
    http: Client,
    config: OcrClientConfig,
}

impl OcrClient {
    /// Create a new OCR client.
    pub fn new(config: OcrClientConfig) -> ClientResult<Self> {
        let http = Client::builder().build().map_err(OcrClientError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(OcrClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Run OCR over both sides of a document.
    ///
    /// Sends a single multipart POST to `{base_url}/api/ocr` with exactly
    /// two parts, `front` and `back`, carrying the image bytes. A 2xx
    /// response must wrap the scan in a top-level `data` field; that field
    /// is what this returns. Anything else fails the call.
    pub async fn run_ocr(
        &self,
        front: &DocumentImage,
        back: &DocumentImage,
    ) -> ClientResult<OcrScan> {
        let url = self.config.endpoint();

        debug!(
            %url,
            front = front.file_name(),
            back = back.file_name(),
            "Sending OCR request"
        );

        let form = Form::new()
            .part(DocumentSide::Front.as_str(), image_part(front)?)
            .part(DocumentSide::Back.as_str(), image_part(back)?);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(OcrClientError::Network)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "OCR service rejected request");
            return Err(OcrClientError::Status { status, body });
        }

        let body: Value = response.json().await?;
        unwrap_envelope(body)
    }
}

/// Build the multipart part for one selected image.
fn image_part(image: &DocumentImage) -> ClientResult<Part> {
    let part = Part::bytes(image.bytes().to_vec())
        .file_name(image.file_name().to_string())
        .mime_str(image.content_type())
        .map_err(OcrClientError::Network)?;

    Ok(part)
}

/// Extract the scan from the service's response envelope.
///
/// Success bodies have the shape `{"data": <scan>}`; the `data` value is
/// the payload surfaced to callers. A 2xx body without it is a contract
/// violation, not a scan.
fn unwrap_envelope(body: Value) -> ClientResult<OcrScan> {
    match body {
        Value::Object(mut map) => map
            .remove("data")
            .map(OcrScan::new)
            .ok_or_else(|| OcrClientError::invalid_response("missing `data` field")),
        other => Err(OcrClientError::invalid_response(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! OCR client configuration.

/// Configuration for the OCR client.
///
/// Read once at startup and injected into [`crate::OcrClient::new`];
/// immutable afterwards. Tests substitute a mock server URL here.
#[derive(Debug, Clone)]
pub struct OcrClientConfig {
    /// Base URL of the OCR service
    pub base_url: String,
}

impl Default for OcrClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
        }
    }
}

impl OcrClientConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("OCR_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
        }
    }

    /// Full URL of the OCR endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/api/ocr", self.base_url.trim_end_matches('/'))
    }
}

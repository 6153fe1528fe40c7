//! Opaque scan payload returned by the OCR service.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON payload extracted from a successful OCR response.
///
/// The service's schema is not validated client-side; the payload is carried
/// as-is and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OcrScan(pub Value);

impl OcrScan {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Render the payload as indented JSON for display.
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl fmt::Display for OcrScan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Value> for OcrScan {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

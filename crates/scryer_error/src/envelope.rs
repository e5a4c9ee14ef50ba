//! The error object returned by the API on non-2xx responses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsed API error body.
///
/// Renders as `status|code: (type)details`, or as one `status|code: warning`
/// line per warning when the API attached warnings.
///
/// # Examples
///
/// ```
/// use scryer_error::ApiErrorEnvelope;
///
/// let envelope: ApiErrorEnvelope = serde_json::from_str(
///     r#"{"object":"error","status":404,"code":"not_found","details":"No card found"}"#,
/// ).unwrap();
/// assert_eq!(envelope.to_string(), "404|not_found: No card found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    /// HTTP status code of the response
    #[serde(default)]
    pub status: u16,
    /// Machine-friendly error code
    pub code: String,
    /// Human-readable explanation
    pub details: String,
    /// Error subtype, such as `ambiguous`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    /// Non-fatal problems the API reported alongside the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

impl ApiErrorEnvelope {
    /// Build an envelope for a response whose body was not an API error object.
    pub fn synthesized(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            code: "unknown".to_string(),
            details: body.into(),
            error_type: None,
            warnings: None,
        }
    }
}

impl fmt::Display for ApiErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.warnings.as_deref() {
            Some(warnings) if !warnings.is_empty() => {
                let lines: Vec<String> = warnings
                    .iter()
                    .map(|warning| format!("{}|{}: {}", self.status, self.code, warning))
                    .collect();
                write!(f, "{}", lines.join("\n"))
            }
            _ => {
                write!(f, "{}|{}: ", self.status, self.code)?;
                if let Some(error_type) = &self.error_type {
                    write!(f, "({})", error_type)?;
                }
                write!(f, "{}", self.details)
            }
        }
    }
}

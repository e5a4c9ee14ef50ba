//! Values exchanged with a [`Transport`](crate::Transport).

use scryer_core::{Method, QueryParams};
use serde_json::Value;

/// One HTTP attempt, fully resolved.
///
/// # Examples
///
/// ```
/// use scryer_core::{Method, QueryParams};
/// use scryer_interface::TransportRequest;
///
/// let request = TransportRequest::builder()
///     .method(Method::Get)
///     .url("https://api.scryfall.com/cards/search")
///     .query(QueryParams::new().with("q", "angel"))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query().get("q"), Some("angel"));
/// assert!(request.body().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct TransportRequest {
    /// HTTP method
    method: Method,
    /// Absolute URL
    url: String,
    /// Query string parameters
    #[builder(default)]
    query: QueryParams,
    /// JSON body
    #[builder(default)]
    body: Option<Value>,
}

impl TransportRequest {
    /// Creates a new request builder.
    pub fn builder() -> TransportRequestBuilder {
        TransportRequestBuilder::default()
    }
}

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

//! Terminal HTTP errors classified from the response status.

use crate::ApiErrorEnvelope;

/// Classification of a terminal (non-retried) HTTP failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum HttpErrorKind {
    /// 403: the resource is not accessible
    #[display("Forbidden")]
    Forbidden,
    /// 404: the resource does not exist
    #[display("Not Found")]
    NotFound,
    /// 5xx: the remote service failed
    #[display("Remote Service Error")]
    RemoteService,
    /// Any other non-2xx status
    #[display("Request Error")]
    Request,
}

impl HttpErrorKind {
    /// Map an HTTP status code to its error classification.
    ///
    /// # Examples
    ///
    /// ```
    /// use scryer_error::HttpErrorKind;
    ///
    /// assert_eq!(HttpErrorKind::from_status(404), HttpErrorKind::NotFound);
    /// assert_eq!(HttpErrorKind::from_status(503), HttpErrorKind::RemoteService);
    /// assert_eq!(HttpErrorKind::from_status(400), HttpErrorKind::Request);
    /// ```
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => HttpErrorKind::Forbidden,
            404 => HttpErrorKind::NotFound,
            s if s >= 500 => HttpErrorKind::RemoteService,
            _ => HttpErrorKind::Request,
        }
    }
}

/// HTTP error carrying the API error envelope and the originating route.
///
/// # Examples
///
/// ```
/// use scryer_error::{ApiErrorEnvelope, HttpError, HttpErrorKind};
///
/// let envelope = ApiErrorEnvelope::synthesized(404, "No card found");
/// let err = HttpError::new("GET /cards/{id}", envelope);
/// assert_eq!(err.kind, HttpErrorKind::NotFound);
/// assert!(err.to_string().contains("404|unknown: No card found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error ({}) on {} at line {} in {}: {}", kind, route, line, file, envelope)]
pub struct HttpError {
    /// Classification derived from the status code
    pub kind: HttpErrorKind,
    /// Unresolved route identifier, e.g. `GET /cards/{id}`
    pub route: String,
    /// Parsed API error body
    pub envelope: ApiErrorEnvelope,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError, classified by the envelope's status code.
    #[track_caller]
    pub fn new(route: impl Into<String>, envelope: ApiErrorEnvelope) -> Self {
        Self::with_kind(HttpErrorKind::from_status(envelope.status), route, envelope)
    }

    /// Create a new HttpError with an explicit classification.
    #[track_caller]
    pub fn with_kind(
        kind: HttpErrorKind,
        route: impl Into<String>,
        envelope: ApiErrorEnvelope,
    ) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            route: route.into(),
            envelope,
            line: location.line(),
            file: location.file(),
        }
    }

    /// HTTP status of the failed response.
    pub fn status(&self) -> u16 {
        self.envelope.status
    }
}

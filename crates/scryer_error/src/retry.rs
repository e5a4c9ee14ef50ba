//! Retry exhaustion.

use crate::HttpError;
use std::fmt;

/// Every attempt of a call was consumed by retryable failures (429 or 5xx).
///
/// When the final attempt was a 5xx whose body decoded as an API error,
/// the mapped [`HttpError`] is kept as the error source.
#[derive(Debug, Clone)]
pub struct ExhaustedRetriesError {
    /// Unresolved route identifier, e.g. `GET /cards/{id}`
    pub route: String,
    /// Number of attempts made
    pub attempts: u32,
    /// Last 5xx response observed, mapped to an error
    pub last_error: Option<HttpError>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ExhaustedRetriesError {
    /// Create a new ExhaustedRetriesError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scryer_error::ExhaustedRetriesError;
    ///
    /// let err = ExhaustedRetriesError::new("GET /sets", 3, None);
    /// assert!(err.to_string().contains("GET /sets"));
    /// ```
    #[track_caller]
    pub fn new(route: impl Into<String>, attempts: u32, last_error: Option<HttpError>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            route: route.into(),
            attempts,
            last_error,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for ExhaustedRetriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exhausted Retries: failed to get endpoint {} after {} attempts at line {} in {}",
            self.route, self.attempts, self.line, self.file
        )
    }
}

impl std::error::Error for ExhaustedRetriesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.last_error
            .as_ref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

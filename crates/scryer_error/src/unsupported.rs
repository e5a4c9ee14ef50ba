//! Deliberately unimplemented endpoints.

/// The endpoint exists in the API but this client does not implement it.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Unsupported Operation: {} at line {} in {}", operation, line, file)]
pub struct UnsupportedOperationError {
    /// Route identifier or operation name
    pub operation: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl UnsupportedOperationError {
    /// Create a new UnsupportedOperationError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scryer_error::UnsupportedOperationError;
    ///
    /// let err = UnsupportedOperationError::new("POST /cards/collection");
    /// assert!(err.to_string().contains("/cards/collection"));
    /// ```
    #[track_caller]
    pub fn new(operation: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            operation: operation.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

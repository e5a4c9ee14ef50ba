//! Local precondition failures.

/// An argument was rejected before any request was issued.
///
/// # Examples
///
/// ```
/// use scryer_error::InvalidArgumentError;
///
/// let err = InvalidArgumentError::new("query exceeds 1000 characters");
/// assert!(err.to_string().contains("1000 characters"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid Argument: {} at line {} in {}", message, line, file)]
pub struct InvalidArgumentError {
    /// Which precondition failed
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InvalidArgumentError {
    /// Create a new InvalidArgumentError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

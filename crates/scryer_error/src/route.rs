//! Route construction errors.

/// A path template placeholder has no bound parameter.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Missing Route Parameter: '{}' in {} at line {} in {}",
    parameter,
    template,
    line,
    file
)]
pub struct MissingRouteParameterError {
    /// Placeholder name without braces
    pub parameter: String,
    /// The path template being constructed
    pub template: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MissingRouteParameterError {
    /// Create a new MissingRouteParameterError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use scryer_error::MissingRouteParameterError;
    ///
    /// let err = MissingRouteParameterError::new("id", "/cards/{id}");
    /// assert!(err.to_string().contains("'id'"));
    /// ```
    #[track_caller]
    pub fn new(parameter: impl Into<String>, template: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            parameter: parameter.into(),
            template: template.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

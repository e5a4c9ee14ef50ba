//! Top-level error wrapper types.

use crate::{
    ConfigError, ExhaustedRetriesError, HttpError, HttpErrorKind, InvalidArgumentError, JsonError,
    MissingRouteParameterError, TransportError, UnsupportedOperationError,
};

/// Every failure a scryer call can surface.
///
/// # Examples
///
/// ```
/// use scryer_error::{ScryerError, TransportError};
///
/// let err: ScryerError = TransportError::new("Connection reset").into();
/// assert!(format!("{}", err).contains("Transport Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ScryerErrorKind {
    /// Local precondition failure; never reached the network
    #[from(InvalidArgumentError)]
    InvalidArgument(InvalidArgumentError),
    /// Route template placeholder without a binding
    #[from(MissingRouteParameterError)]
    MissingRouteParameter(MissingRouteParameterError),
    /// Network failure after retries were exhausted
    #[from(TransportError)]
    Transport(TransportError),
    /// Every attempt consumed by 429/5xx responses
    #[from(ExhaustedRetriesError)]
    ExhaustedRetries(ExhaustedRetriesError),
    /// Terminal HTTP failure carrying the API error envelope
    #[from(HttpError)]
    Http(HttpError),
    /// Endpoint deliberately not implemented
    #[from(UnsupportedOperationError)]
    UnsupportedOperation(UnsupportedOperationError),
    /// Response body could not be decoded
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration could not be loaded
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Scryer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use scryer_error::{ScryerErrorKind, ScryerResult, UnsupportedOperationError};
///
/// fn collection() -> ScryerResult<()> {
///     Err(UnsupportedOperationError::new("POST /cards/collection"))?
/// }
///
/// let err = collection().unwrap_err();
/// assert!(matches!(err.kind(), ScryerErrorKind::UnsupportedOperation(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Scryer Error: {}", _0)]
pub struct ScryerError(Box<ScryerErrorKind>);

impl ScryerError {
    /// Create a new error from a kind.
    pub fn new(kind: ScryerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScryerErrorKind {
        &self.0
    }

    /// The terminal HTTP error, if this is one.
    pub fn http(&self) -> Option<&HttpError> {
        match self.kind() {
            ScryerErrorKind::Http(err) => Some(err),
            _ => None,
        }
    }

    /// True when the API answered 404.
    pub fn is_not_found(&self) -> bool {
        self.http()
            .is_some_and(|err| err.kind == HttpErrorKind::NotFound)
    }
}

// Generic From implementation for any type that converts to ScryerErrorKind
impl<T> From<T> for ScryerError
where
    T: Into<ScryerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for scryer operations.
pub type ScryerResult<T> = std::result::Result<T, ScryerError>;

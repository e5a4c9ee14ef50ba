//! Error types for the scryer library.
//!
//! This crate provides the error types used throughout the scryer workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enums name specific error conditions
//! - `*Error` structs wrap the condition with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Terminal HTTP failures carry the parsed [`ApiErrorEnvelope`] returned by
//! the API, so every error renders its status, code and details.
//!
//! # Examples
//!
//! ```
//! use scryer_error::{InvalidArgumentError, ScryerResult};
//!
//! fn check_query(q: &str) -> ScryerResult<()> {
//!     if q.is_empty() {
//!         Err(InvalidArgumentError::new("query must not be empty"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_query("").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod argument;
mod config;
mod envelope;
mod error;
mod http;
mod json;
mod retry;
mod route;
mod transport;
mod unsupported;

pub use argument::InvalidArgumentError;
pub use config::ConfigError;
pub use envelope::ApiErrorEnvelope;
pub use error::{ScryerError, ScryerErrorKind, ScryerResult};
pub use http::{HttpError, HttpErrorKind};
pub use json::JsonError;
pub use retry::ExhaustedRetriesError;
pub use route::MissingRouteParameterError;
pub use transport::TransportError;
pub use unsupported::UnsupportedOperationError;

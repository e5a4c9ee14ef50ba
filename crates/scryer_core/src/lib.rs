//! Core request types for the scryer library.
//!
//! This crate provides the values every request is described with: the
//! HTTP [`Method`], the [`Route`] descriptor that resolves a path template
//! into a URL, and the [`QueryParams`] attached to a call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod method;
mod query;
mod route;

pub use method::Method;
pub use query::QueryParams;
pub use route::{Route, RouteParam};

/// Origin every route resolves against unless configured otherwise.
pub const SCRYFALL_API_BASE: &str = "https://api.scryfall.com";

/// Version of this library, embedded in the default user agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default user agent sent with every request.
pub fn default_user_agent() -> String {
    format!("scryer/{}", VERSION)
}

//! Trait definitions for the scryer library.
//!
//! This crate provides the seams between the request pipeline, the HTTP
//! transport and the resource records:
//! - [`Requester`]: anything that can perform a described request
//! - [`ClientHandle`]: the shared capability a decoded record keeps for follow-up calls
//! - [`Transport`]: one HTTP attempt, swappable for tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ClientHandle, Requester, Transport};
pub use types::{TransportRequest, TransportRequestBuilder, TransportResponse};

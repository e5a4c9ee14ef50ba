//! Rate limiting and retry policy for the scryer request pipeline.
//!
//! The API allows a fixed number of requests per second across a client.
//! This crate provides:
//! - [`RateGate`]: the shared per-window quota every attempt passes through
//! - [`RetryPolicy`]: the attempt state machine deciding between returning,
//!   raising, cooling down and backing off
//! - [`ScryerConfig`]: layered TOML configuration for both, plus HTTP settings

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gate;
mod retry;

pub use config::{HttpConfig, RateLimitConfig, RetryConfig, ScryerConfig};
pub use gate::RateGate;
pub use retry::{AttemptOutcome, AttemptState, RetryPolicy, Step};

//! Rate-limited, retrying HTTP client for the Scryfall API.
//!
//! [`ScryerClient`] runs every call through one pipeline: wait for a slot in
//! the shared [`RateGate`](scryer_rate_limit::RateGate), send the request,
//! classify the response, and either return its JSON body, raise a typed
//! error, or retry. Requests go out through a [`Transport`]; the default
//! [`ReqwestTransport`] builds its connection pool on first use.
//!
//! # Example
//!
//! ```no_run
//! use scryer_client::ScryerClient;
//! use scryer_models::CardRequests;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ScryerClient::new();
//! let card = client.search_cards_named(Some("Fathom Seer"), None, None).await?;
//! println!("{} ({})", card.name, card.set_name);
//! client.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! [`Transport`]: scryer_interface::Transport

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod decode;
mod transport;

pub use client::ScryerClient;
pub use decode::{map_error_response, parse_error_envelope};
pub use transport::ReqwestTransport;

//! Scryer - rate-limited client for the Scryfall card database API
//!
//! Scryer wraps the public Scryfall REST API behind typed records and a
//! single request pipeline that respects the API's request quota.
//!
//! # Features
//!
//! - **Rate Gate**: a shared per-second quota across every call of a client
//! - **Retries**: 429 cools the gate down, 5xx and network failures back off
//! - **Typed Errors**: every non-2xx response becomes a structured error
//!   carrying the API's error object
//! - **Typed Records**: cards, sets, rulings, catalogs, bulk data and symbols
//! - **Pagination**: list responses fetch their next page on demand
//!
//! # Quick Start
//!
//! ```no_run
//! use scryer::{CardRequests, ScryerClient, SearchParams, SortOrder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ScryerClient::new();
//!
//!     let params = SearchParams::builder()
//!         .q("t:angel c:w")
//!         .order(SortOrder::Released)
//!         .build()?;
//!     let mut page = Some(client.search_cards(&params).await?);
//!     while let Some(current) = page {
//!         for card in current.cards() {
//!             println!("{} ({})", card.name, card.set_name);
//!         }
//!         page = current.get_next_page().await?;
//!     }
//!
//!     client.close().await;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Scryer is organized as a workspace with focused crates:
//!
//! - `scryer_error` - Error types
//! - `scryer_core` - Methods, routes and query parameters
//! - `scryer_rate_limit` - Rate gate, retry policy and configuration
//! - `scryer_interface` - Requester and transport traits
//! - `scryer_models` - Resource records and endpoint helpers
//! - `scryer_client` - The request pipeline and reqwest transport
//!
//! This crate (`scryer`) re-exports everything for convenience.

pub use scryer_client::*;
pub use scryer_core::*;
pub use scryer_error::*;
pub use scryer_interface::*;
pub use scryer_models::*;
pub use scryer_rate_limit::*;

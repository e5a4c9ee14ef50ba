//! Resource records and endpoint helpers for scryer.
//!
//! Records are decoded from the API's JSON. Those that need follow-up calls
//! ([`Card`], [`Set`], [`ApiList`]) keep a [`ClientHandle`] attached after
//! decoding rather than a reference to a concrete client type.
//!
//! Endpoint helpers are extension traits implemented for every
//! [`Requester`](scryer_interface::Requester):
//!
//! ```no_run
//! use scryer_models::{CardRequests, SearchParams, SortOrder};
//! use scryer_interface::Requester;
//!
//! # async fn demo(client: &impl Requester) -> Result<(), Box<dyn std::error::Error>> {
//! let params = SearchParams::builder()
//!     .q("t:angel c:w")
//!     .order(SortOrder::Released)
//!     .build()?;
//! let page = client.search_cards(&params).await?;
//! for card in page.cards() {
//!     println!("{}", card.name);
//! }
//! if let Some(next) = page.get_next_page().await? {
//!     println!("{} more", next.data.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`ClientHandle`]: scryer_interface::ClientHandle

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bulk;
mod card;
mod catalog;
mod decode;
mod list;
mod requests;
mod ruling;
mod search;
mod set;
mod symbol;

pub use bulk::BulkData;
pub use card::{
    BorderColor, Card, CardFace, Color, Finish, Game, ImageStatus, Legality, Preview, Rarity,
    RelatedCard,
};
pub use catalog::{Catalog, CatalogKind};
pub use decode::{Bind, decode};
pub use list::{ApiList, ApiObject};
pub use requests::{
    BulkDataRequests, CardRequests, CatalogRequests, SetRequests, SymbologyRequests,
};
pub use ruling::{Ruling, RulingSource};
pub use search::{SearchParams, SearchParamsBuilder, SortDirection, SortOrder, Unique};
pub use set::Set;
pub use symbol::CardSymbol;

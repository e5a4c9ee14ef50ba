//! Endpoint helpers, one extension trait per resource family.
//!
//! Every helper validates its arguments locally, builds a [`Route`], and
//! sends it through [`Requester::request`]. Records that support follow-up
//! calls come back bound to the requester's handle.
//!
//! [`Route`]: scryer_core::Route
//! [`Requester::request`]: scryer_interface::Requester::request

mod bulk;
mod cards;
mod catalogs;
mod sets;
mod symbology;

pub use bulk::BulkDataRequests;
pub use cards::CardRequests;
pub use catalogs::CatalogRequests;
pub use sets::SetRequests;
pub use symbology::SymbologyRequests;

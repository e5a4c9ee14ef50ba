//! `/catalog` endpoints.

use crate::decode::decode;
use crate::{Catalog, CatalogKind};
use async_trait::async_trait;
use scryer_core::Route;
use scryer_error::ScryerResult;
use scryer_interface::Requester;

/// Catalog listings.
#[async_trait]
pub trait CatalogRequests: Requester {
    /// Fetch one catalog.
    async fn get_catalog(&self, kind: CatalogKind) -> ScryerResult<Catalog> {
        let route = Route::get("/catalog/{name}", [("name", kind.as_ref().into())])?;
        decode(self.request(&route, None, None).await?)
    }
}

impl<R: Requester + ?Sized> CatalogRequests for R {}

//! `/sets` endpoints.

use crate::decode::decode_bound;
use crate::{ApiList, Set};
use async_trait::async_trait;
use scryer_core::{Method, Route};
use scryer_error::ScryerResult;
use scryer_interface::Requester;
use tracing::instrument;

/// Set lookups.
#[async_trait]
pub trait SetRequests: Requester {
    /// List every set.
    #[instrument(level = "debug", skip(self))]
    async fn get_all_sets(&self) -> ScryerResult<ApiList> {
        let route = Route::fixed(Method::Get, "/sets")?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch a set by Scryfall id.
    #[instrument(level = "debug", skip(self))]
    async fn get_set_by_id(&self, id: &str) -> ScryerResult<Set> {
        let route = Route::get("/sets/{id}", [("id", id.into())])?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch a set by its code.
    #[instrument(level = "debug", skip(self))]
    async fn get_set_by_code(&self, code: &str) -> ScryerResult<Set> {
        let route = Route::get("/sets/{code}", [("code", code.into())])?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch a set by TCGplayer group id.
    #[instrument(level = "debug", skip(self))]
    async fn get_set_by_tcgplayer_id(&self, id: u32) -> ScryerResult<Set> {
        let route = Route::get("/sets/tcgplayer/{id}", [("id", id.into())])?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }
}

impl<R: Requester + ?Sized> SetRequests for R {}

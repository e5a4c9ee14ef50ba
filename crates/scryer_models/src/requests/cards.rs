//! `/cards` endpoints.

use crate::decode::{DataList, decode, decode_bound};
use crate::{ApiList, Card, Catalog, Ruling, SearchParams};
use async_trait::async_trait;
use scryer_core::{Method, QueryParams, Route};
use scryer_error::{InvalidArgumentError, ScryerResult, UnsupportedOperationError};
use scryer_interface::Requester;
use serde_json::Value;
use tracing::instrument;

/// Card lookups and searches.
#[async_trait]
pub trait CardRequests: Requester {
    /// Fetch a card by Scryfall id.
    #[instrument(level = "debug", skip(self))]
    async fn get_card_by_id(&self, id: &str) -> ScryerResult<Card> {
        let route = Route::get("/cards/{id}", [("id", id.into())])?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch a card by set code and collector number, optionally in another language.
    #[instrument(level = "debug", skip(self))]
    async fn get_card_by_set_code_and_collector_number(
        &self,
        code: &str,
        collector_number: &str,
        lang: Option<&str>,
    ) -> ScryerResult<Card> {
        let route = match lang {
            Some(lang) => Route::get(
                "/cards/{code}/{number}/{lang}",
                [
                    ("code", code.into()),
                    ("number", collector_number.into()),
                    ("lang", lang.into()),
                ],
            )?,
            None => Route::get(
                "/cards/{code}/{number}",
                [("code", code.into()), ("number", collector_number.into())],
            )?,
        };
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch a card by Gatherer multiverse id.
    #[instrument(level = "debug", skip(self))]
    async fn get_card_by_multiverse_id(&self, id: u32) -> ScryerResult<Card> {
        let route = Route::get("/cards/multiverse/{id}", [("id", id.into())])?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch a card by Magic Online id.
    #[instrument(level = "debug", skip(self))]
    async fn get_card_by_mtgo_id(&self, id: u32) -> ScryerResult<Card> {
        let route = Route::get("/cards/mtgo/{id}", [("id", id.into())])?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch a card by Arena id.
    #[instrument(level = "debug", skip(self))]
    async fn get_card_by_arena_id(&self, id: u32) -> ScryerResult<Card> {
        let route = Route::get("/cards/arena/{id}", [("id", id.into())])?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch a card by TCGplayer id.
    #[instrument(level = "debug", skip(self))]
    async fn get_card_by_tcgplayer_id(&self, id: u32) -> ScryerResult<Card> {
        let route = Route::get("/cards/tcgplayer/{id}", [("id", id.into())])?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch a card by Cardmarket id.
    #[instrument(level = "debug", skip(self))]
    async fn get_card_by_cardmarket_id(&self, id: u32) -> ScryerResult<Card> {
        let route = Route::get("/cards/cardmarket/{id}", [("id", id.into())])?;
        let value = self.request(&route, None, None).await?;
        decode_bound(value, &self.handle())
    }

    /// Run a full-text search and return its first requested page.
    ///
    /// Parameters are validated before anything is sent.
    #[instrument(level = "debug", skip(self, params), fields(q = %params.q(), page = params.page()))]
    async fn search_cards(&self, params: &SearchParams) -> ScryerResult<ApiList> {
        params.validate()?;
        let route = Route::fixed(Method::Get, "/cards/search")?;
        let query = params.to_query();
        let value = self.request(&route, Some(&query), None).await?;
        decode_bound(value, &self.handle())
    }

    /// Search with `q` and every other parameter at its default.
    async fn search(&self, q: &str) -> ScryerResult<ApiList> {
        let params = SearchParams::new(q)?;
        self.search_cards(&params).await
    }

    /// Look a card up by name, either exactly or fuzzily, optionally within a set.
    ///
    /// Exactly one of `exact` and `fuzzy` must be given; empty strings count
    /// as absent.
    #[instrument(level = "debug", skip(self))]
    async fn search_cards_named(
        &self,
        exact: Option<&str>,
        fuzzy: Option<&str>,
        set: Option<&str>,
    ) -> ScryerResult<Card> {
        let exact = exact.filter(|s| !s.is_empty());
        let fuzzy = fuzzy.filter(|s| !s.is_empty());
        let query = match (exact, fuzzy) {
            (Some(name), None) => QueryParams::new().with("exact", name),
            (None, Some(name)) => QueryParams::new().with("fuzzy", name),
            _ => Err(InvalidArgumentError::new(
                "exactly one of exact or fuzzy must be given",
            ))?,
        }
        .with_opt("set", set.filter(|s| !s.is_empty()));

        let route = Route::fixed(Method::Get, "/cards/named")?;
        let value = self.request(&route, Some(&query), None).await?;
        decode_bound(value, &self.handle())
    }

    /// Suggest up to twenty card names completing `q`.
    #[instrument(level = "debug", skip(self))]
    async fn cards_autocomplete(&self, q: &str, include_extras: bool) -> ScryerResult<Catalog> {
        let route = Route::fixed(Method::Get, "/cards/autocomplete")?;
        let query = QueryParams::new()
            .with("q", q)
            .with("include_extras", include_extras);
        let value = self.request(&route, Some(&query), None).await?;
        decode(value)
    }

    /// Fetch a random card, optionally restricted by a search query.
    #[instrument(level = "debug", skip(self))]
    async fn get_random_card(&self, q: Option<&str>) -> ScryerResult<Card> {
        if let Some(q) = q {
            SearchParams::new(q)?;
        }
        let route = Route::fixed(Method::Get, "/cards/random")?;
        let query = QueryParams::new().with_opt("q", q);
        let value = self.request(&route, Some(&query), None).await?;
        decode_bound(value, &self.handle())
    }

    /// Fetch the rulings for a card by Scryfall id.
    #[instrument(level = "debug", skip(self))]
    async fn get_rulings_by_card_id(&self, id: &str) -> ScryerResult<Vec<Ruling>> {
        let route = Route::get("/cards/{id}/rulings", [("id", id.into())])?;
        let value = self.request(&route, None, None).await?;
        let rulings: DataList<Ruling> = decode(value)?;
        Ok(rulings.data)
    }

    /// Fetch many cards by identifier in one call. Not implemented.
    ///
    /// # Errors
    ///
    /// Always fails with an unsupported operation error, without a request.
    async fn get_card_collection(&self, _identifiers: &[Value]) -> ScryerResult<ApiList> {
        Err(UnsupportedOperationError::new("POST /cards/collection"))?
    }
}

impl<R: Requester + ?Sized> CardRequests for R {}

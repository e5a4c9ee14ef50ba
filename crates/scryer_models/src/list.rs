//! Paginated list responses.

use crate::decode::Bind;
use crate::{Card, CardRequests, CardSymbol, Ruling, SearchParams, Set};
use scryer_error::{InvalidArgumentError, ScryerResult};
use scryer_interface::ClientHandle;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An element of a list response, discriminated by its `object` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum ApiObject {
    /// A card print
    Card(Box<Card>),
    /// A card symbol
    CardSymbol(CardSymbol),
    /// A ruling
    Ruling(Ruling),
    /// A set
    Set(Set),
}

impl ApiObject {
    /// The card, if this element is one.
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            ApiObject::Card(card) => Some(card.as_ref()),
            _ => None,
        }
    }

    /// The set, if this element is one.
    pub fn as_set(&self) -> Option<&Set> {
        match self {
            ApiObject::Set(set) => Some(set),
            _ => None,
        }
    }
}

impl Bind for ApiObject {
    fn bind(&mut self, handle: &ClientHandle) {
        match self {
            ApiObject::Card(card) => card.bind(handle),
            ApiObject::Set(set) => set.bind(handle),
            ApiObject::CardSymbol(_) | ApiObject::Ruling(_) => {}
        }
    }
}

/// One page of a list response.
///
/// Card search pages link to the next page through `next_page`; a bound list
/// can follow that link with [`get_next_page`](ApiList::get_next_page).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiList {
    /// Elements of this page
    pub data: Vec<ApiObject>,
    /// More pages follow
    #[serde(default)]
    pub has_more: bool,
    /// URI of the next page
    #[serde(default)]
    pub next_page: Option<String>,
    /// Total cards across every page, for card searches
    #[serde(default)]
    pub total_cards: Option<u64>,
    /// Non-fatal warnings about the query
    #[serde(default)]
    pub warnings: Option<Vec<String>>,

    #[serde(skip)]
    client: Option<ClientHandle>,
}

impl ApiList {
    /// Cards on this page, skipping elements of other kinds.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.data.iter().filter_map(ApiObject::as_card)
    }

    /// Sets on this page, skipping elements of other kinds.
    pub fn sets(&self) -> impl Iterator<Item = &Set> {
        self.data.iter().filter_map(ApiObject::as_set)
    }

    /// The handle attached to this list, if bound.
    pub fn client(&self) -> Option<&ClientHandle> {
        self.client.as_ref()
    }

    /// Fetch the next page, or `None` on the last page.
    ///
    /// The `next_page` URI's query is replayed as a card search; the
    /// `format` parameter it carries is dropped.
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error when more pages exist but the
    /// list is not bound to a client.
    pub async fn get_next_page(&self) -> ScryerResult<Option<ApiList>> {
        if !self.has_more {
            return Ok(None);
        }
        let Some(next_page) = self.next_page.as_deref() else {
            debug!("List claims more pages but has no next_page link");
            return Ok(None);
        };

        let client = self
            .client
            .as_ref()
            .ok_or_else(|| InvalidArgumentError::new("list is not bound to a client"))?;
        let params = SearchParams::from_url(next_page)?;
        debug!(page = params.page(), "Fetching next page");
        client.search_cards(&params).await.map(Some)
    }
}

impl Bind for ApiList {
    fn bind(&mut self, handle: &ClientHandle) {
        self.client = Some(handle.clone());
        for item in &mut self.data {
            item.bind(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use serde_json::json;

    #[test]
    fn decodes_mixed_elements_by_tag() {
        let list: ApiList = decode(json!({
            "object": "list",
            "has_more": false,
            "data": [
                {
                    "object": "ruling",
                    "oracle_id": "44623693-51d6-49ad-8cd7-140505caf02f",
                    "source": "wotc",
                    "published_at": "2004-10-04",
                    "comment": "It can target itself."
                },
                {
                    "object": "card_symbol",
                    "symbol": "{W}",
                    "english": "one white mana",
                    "colors": ["W"]
                }
            ]
        }))
        .unwrap();

        assert_eq!(list.data.len(), 2);
        assert!(matches!(list.data[0], ApiObject::Ruling(_)));
        assert!(matches!(list.data[1], ApiObject::CardSymbol(_)));
        assert_eq!(list.cards().count(), 0);
    }

    #[test]
    fn unknown_object_kind_is_a_json_error() {
        let result = decode::<ApiList>(json!({
            "object": "list",
            "has_more": false,
            "data": [{"object": "planeswalker_emblem"}]
        }));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn last_page_has_no_successor_even_unbound() {
        let list: ApiList = decode(json!({
            "object": "list",
            "has_more": false,
            "data": []
        }))
        .unwrap();
        assert!(list.get_next_page().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unbound_list_with_more_pages_is_rejected() {
        let list: ApiList = decode(json!({
            "object": "list",
            "has_more": true,
            "next_page": "https://api.scryfall.com/cards/search?q=angel&page=2",
            "data": []
        }))
        .unwrap();
        assert!(list.get_next_page().await.is_err());
    }
}

//! Scripted requester for endpoint tests.

use async_trait::async_trait;
use scryer_core::{QueryParams, Route};
use scryer_error::{ScryerResult, TransportError};
use scryer_interface::{ClientHandle, Requester};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub identifier: String,
    pub path: String,
    pub query: Option<QueryParams>,
}

/// Requester that answers from a queue of JSON bodies and records every call.
#[derive(Clone, Default)]
pub struct StubRequester {
    responses: Arc<Mutex<VecDeque<Value>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubRequester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: Value) -> Self {
        self.responses.lock().unwrap().push_back(body);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Requester for StubRequester {
    async fn request(
        &self,
        route: &Route,
        query: Option<&QueryParams>,
        _body: Option<&Value>,
    ) -> ScryerResult<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            identifier: route.identifier(),
            path: route.resolved_path(),
            query: query.cloned(),
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(body) => Ok(body),
            None => Err(TransportError::new("no scripted response"))?,
        }
    }

    fn handle(&self) -> ClientHandle {
        ClientHandle::new(self.clone())
    }
}

pub const CARD_ID: &str = "0000579f-7b35-4ed3-b44c-db2a538066fe";
pub const SET_ID: &str = "385e11a4-492b-4d07-b4a6-a1409ef829b8";

pub fn card_json(name: &str) -> Value {
    json!({
        "object": "card",
        "id": CARD_ID,
        "lang": "en",
        "layout": "normal",
        "uri": format!("https://api.scryfall.com/cards/{CARD_ID}"),
        "scryfall_uri": "https://scryfall.com/card/mmq/91/fathom-seer",
        "rulings_uri": format!("https://api.scryfall.com/cards/{CARD_ID}/rulings"),
        "prints_search_uri": "https://api.scryfall.com/cards/search?q=oracleid%3A1&unique=prints",
        "name": name,
        "set": "mmq",
        "set_id": SET_ID,
        "set_name": "Mercadian Masques",
        "collector_number": "91",
        "rarity": "common"
    })
}

pub fn set_json() -> Value {
    json!({
        "object": "set",
        "id": SET_ID,
        "code": "mmq",
        "name": "Mercadian Masques",
        "set_type": "expansion",
        "card_count": 350,
        "digital": false,
        "foil_only": false,
        "nonfoil_only": false,
        "scryfall_uri": "https://scryfall.com/sets/mmq",
        "uri": format!("https://api.scryfall.com/sets/{SET_ID}"),
        "icon_svg_uri": "https://svgs.scryfall.io/sets/mmq.svg",
        "search_uri": "https://api.scryfall.com/cards/search?include_extras=true&include_variations=true&order=set&q=e%3Ammq&unique=prints"
    })
}

pub fn list_json(cards: Vec<Value>, next_page: Option<&str>) -> Value {
    json!({
        "object": "list",
        "total_cards": 3,
        "has_more": next_page.is_some(),
        "next_page": next_page,
        "data": cards
    })
}

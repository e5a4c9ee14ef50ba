//! Test utilities for scryer_client tests.

pub mod mock_transport;

#[allow(unused_imports)]
pub use mock_transport::{MockReply, MockTransport, RecordedRequest};

use serde_json::{Value, json};

#[allow(dead_code)]
pub const CARD_ID: &str = "0000579f-7b35-4ed3-b44c-db2a538066fe";

/// Minimal card object the models decode.
#[allow(dead_code)]
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
        "set_id": "385e11a4-492b-4d07-b4a6-a1409ef829b8",
        "set_name": "Mercadian Masques",
        "collector_number": "91",
        "rarity": "common"
    })
}

/// API error object body.
#[allow(dead_code)]
pub fn error_body(status: u16, code: &str, details: &str) -> String {
    json!({
        "object": "error",
        "status": status,
        "code": code,
        "details": details
    })
    .to_string()
}

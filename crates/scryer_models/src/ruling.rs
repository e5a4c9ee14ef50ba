//! Ruling records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who published a ruling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RulingSource {
    /// Wizards of the Coast
    Wotc,
    /// Scryfall
    Scryfall,
    /// A value this library does not know yet
    #[serde(other)]
    Unknown,
}

/// An Oracle ruling or note attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruling {
    /// Oracle id of the card
    pub oracle_id: Uuid,
    /// Publisher
    pub source: RulingSource,
    /// Publication date
    pub published_at: NaiveDate,
    /// Ruling text
    pub comment: String,
}

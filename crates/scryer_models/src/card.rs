//! Card records.

use crate::decode::Bind;
use crate::{CardRequests, Ruling, Set, SetRequests};
use chrono::NaiveDate;
use scryer_error::{InvalidArgumentError, ScryerResult};
use scryer_interface::ClientHandle;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A colour of mana or colour identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Color {
    /// White
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    White,
    /// Blue
    #[serde(rename = "U")]
    #[strum(serialize = "U")]
    Blue,
    /// Black
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    Black,
    /// Red
    #[serde(rename = "R")]
    #[strum(serialize = "R")]
    Red,
    /// Green
    #[serde(rename = "G")]
    #[strum(serialize = "G")]
    Green,
    /// Colorless
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    Colorless,
    /// A value this library does not know yet
    #[serde(other)]
    #[strum(serialize = "unknown")]
    Unknown,
}

/// Print rarity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Rarity {
    /// Common
    Common,
    /// Uncommon
    Uncommon,
    /// Rare
    Rare,
    /// Special
    Special,
    /// Mythic rare
    Mythic,
    /// Bonus
    Bonus,
    /// A value this library does not know yet
    #[serde(other)]
    Unknown,
}

/// Legality of a card in one format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Legality {
    /// Legal
    Legal,
    /// Not legal
    NotLegal,
    /// Restricted to one copy
    Restricted,
    /// Banned
    Banned,
    /// A value this library does not know yet
    #[serde(other)]
    Unknown,
}

/// Border colour of a print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BorderColor {
    /// Black
    Black,
    /// White
    White,
    /// Borderless
    Borderless,
    /// Silver
    Silver,
    /// Gold
    Gold,
    /// Yellow
    Yellow,
    /// A value this library does not know yet
    #[serde(other)]
    Unknown,
}

/// Quality of the images available for a print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageStatus {
    /// No image
    Missing,
    /// Placeholder image
    Placeholder,
    /// Low resolution
    Lowres,
    /// High resolution scan
    HighresScan,
    /// A value this library does not know yet
    #[serde(other)]
    Unknown,
}

/// A finish the print is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Finish {
    /// Regular
    Nonfoil,
    /// Foil
    Foil,
    /// Etched foil
    Etched,
    /// Glossy
    Glossy,
    /// A value this library does not know yet
    #[serde(other)]
    Unknown,
}

/// A game the print is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Game {
    /// Paper
    Paper,
    /// Arena
    Arena,
    /// Magic Online
    Mtgo,
    /// Astral
    Astral,
    /// Sega
    Sega,
    /// A value this library does not know yet
    #[serde(other)]
    Unknown,
}

/// One face of a multi-faced card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    /// Face name
    pub name: String,
    /// Mana cost, empty when the face has none
    #[serde(default)]
    pub mana_cost: String,
    /// Type line
    #[serde(default)]
    pub type_line: Option<String>,
    /// Rules text
    #[serde(default)]
    pub oracle_text: Option<String>,
    /// Colours
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    /// Power
    #[serde(default)]
    pub power: Option<String>,
    /// Toughness
    #[serde(default)]
    pub toughness: Option<String>,
    /// Loyalty
    #[serde(default)]
    pub loyalty: Option<String>,
    /// Flavor text
    #[serde(default)]
    pub flavor_text: Option<String>,
    /// Artist
    #[serde(default)]
    pub artist: Option<String>,
    /// Image URIs keyed by size
    #[serde(default)]
    pub image_uris: Option<HashMap<String, String>>,
}

/// A card closely related to another (token, meld part, combo piece).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCard {
    /// Scryfall id of the related card
    pub id: Uuid,
    /// `token`, `meld_part`, `meld_result` or `combo_piece`
    pub component: String,
    /// Name
    pub name: String,
    /// Type line
    pub type_line: String,
    /// API URI of the related card
    pub uri: String,
}

/// Preview information for a spoiled card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    /// When the card was previewed
    #[serde(default)]
    pub previewed_at: Option<NaiveDate>,
    /// Where the preview was published; empty strings decode as `None`
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub source_uri: Option<String>,
    /// Who published the preview
    #[serde(default)]
    pub source: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// A single card print.
///
/// Decoded cards hold a client handle once bound, which enables
/// [`get_set`](Card::get_set) and [`get_rulings`](Card::get_rulings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    // Core fields
    /// Scryfall id
    pub id: Uuid,
    /// Oracle id shared by every print of the card
    #[serde(default)]
    pub oracle_id: Option<Uuid>,
    /// Gatherer ids
    #[serde(default)]
    pub multiverse_ids: Vec<u32>,
    /// Magic Online id
    #[serde(default)]
    pub mtgo_id: Option<u32>,
    /// Arena id
    #[serde(default)]
    pub arena_id: Option<u32>,
    /// TCGplayer id
    #[serde(default)]
    pub tcgplayer_id: Option<u32>,
    /// Cardmarket id
    #[serde(default)]
    pub cardmarket_id: Option<u32>,
    /// Language code
    pub lang: String,
    /// Layout code
    pub layout: String,
    /// API URI of this card
    pub uri: String,
    /// Scryfall web page
    pub scryfall_uri: String,
    /// Rulings list URI
    pub rulings_uri: String,
    /// Search URI listing every print
    pub prints_search_uri: String,

    // Gameplay fields
    /// Name
    pub name: String,
    /// Mana cost
    #[serde(default)]
    pub mana_cost: Option<String>,
    /// Mana value
    #[serde(default)]
    pub cmc: Option<f64>,
    /// Type line
    #[serde(default)]
    pub type_line: Option<String>,
    /// Rules text
    #[serde(default)]
    pub oracle_text: Option<String>,
    /// Colours
    #[serde(default)]
    pub colors: Option<Vec<Color>>,
    /// Colour identity
    #[serde(default)]
    pub color_identity: Vec<Color>,
    /// Keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Power
    #[serde(default)]
    pub power: Option<String>,
    /// Toughness
    #[serde(default)]
    pub toughness: Option<String>,
    /// Loyalty
    #[serde(default)]
    pub loyalty: Option<String>,
    /// Legality per format
    #[serde(default)]
    pub legalities: HashMap<String, Legality>,
    /// On the reserved list
    #[serde(default)]
    pub reserved: bool,
    /// Faces of a multi-faced card
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
    /// Related cards
    #[serde(default)]
    pub all_parts: Option<Vec<RelatedCard>>,
    /// EDHREC popularity rank
    #[serde(default)]
    pub edhrec_rank: Option<u32>,

    // Print fields
    /// Set code
    pub set: String,
    /// Set id
    pub set_id: Uuid,
    /// Set name
    pub set_name: String,
    /// Set type
    #[serde(default)]
    pub set_type: Option<String>,
    /// Set API URI
    #[serde(default)]
    pub set_uri: Option<String>,
    /// Collector number; not always numeric
    pub collector_number: String,
    /// Rarity
    pub rarity: Rarity,
    /// Release date
    #[serde(default)]
    pub released_at: Option<NaiveDate>,
    /// Artist
    #[serde(default)]
    pub artist: Option<String>,
    /// Flavor text
    #[serde(default)]
    pub flavor_text: Option<String>,
    /// Border colour
    #[serde(default)]
    pub border_color: Option<BorderColor>,
    /// Frame edition
    #[serde(default)]
    pub frame: Option<String>,
    /// Finishes available
    #[serde(default)]
    pub finishes: Vec<Finish>,
    /// Games available
    #[serde(default)]
    pub games: Vec<Game>,
    /// Image quality
    #[serde(default)]
    pub image_status: Option<ImageStatus>,
    /// Image URIs keyed by size
    #[serde(default)]
    pub image_uris: Option<HashMap<String, String>>,
    /// Prices keyed by currency
    #[serde(default)]
    pub prices: HashMap<String, Option<String>>,
    /// Purchase links keyed by vendor
    #[serde(default)]
    pub purchase_uris: Option<HashMap<String, String>>,
    /// Reprint of an earlier card
    #[serde(default)]
    pub reprint: bool,
    /// Digital only
    #[serde(default)]
    pub digital: bool,
    /// Promo print
    #[serde(default)]
    pub promo: bool,
    /// Preview information
    #[serde(default)]
    pub preview: Option<Preview>,

    #[serde(skip)]
    client: Option<ClientHandle>,
}

impl Card {
    /// The handle attached to this card, if bound.
    pub fn client(&self) -> Option<&ClientHandle> {
        self.client.as_ref()
    }

    fn bound(&self) -> ScryerResult<&ClientHandle> {
        self.client
            .as_ref()
            .ok_or_else(|| InvalidArgumentError::new("card is not bound to a client").into())
    }

    /// Fetch the set this card was printed in.
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error when the card is not bound.
    pub async fn get_set(&self) -> ScryerResult<Set> {
        let client = self.bound()?;
        client.get_set_by_id(&self.set_id.to_string()).await
    }

    /// Fetch the rulings for this card.
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error when the card is not bound.
    pub async fn get_rulings(&self) -> ScryerResult<Vec<Ruling>> {
        let client = self.bound()?;
        client.get_rulings_by_card_id(&self.id.to_string()).await
    }
}

impl Bind for Card {
    fn bind(&mut self, handle: &ClientHandle) {
        self.client = Some(handle.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;
    use serde_json::json;

    fn fixture() -> serde_json::Value {
        json!({
            "object": "card",
            "id": "0000579f-7b35-4ed3-b44c-db2a538066fe",
            "oracle_id": "44623693-51d6-49ad-8cd7-140505caf02f",
            "multiverse_ids": [109722],
            "lang": "en",
            "layout": "normal",
            "uri": "https://api.scryfall.com/cards/0000579f-7b35-4ed3-b44c-db2a538066fe",
            "scryfall_uri": "https://scryfall.com/card/mmq/91/fathom-seer",
            "rulings_uri": "https://api.scryfall.com/cards/0000579f-7b35-4ed3-b44c-db2a538066fe/rulings",
            "prints_search_uri": "https://api.scryfall.com/cards/search?order=released&q=oracleid%3A44623693&unique=prints",
            "name": "Fathom Seer",
            "mana_cost": "{1}{U}",
            "cmc": 2.0,
            "type_line": "Creature — Illusion",
            "colors": ["U"],
            "color_identity": ["U"],
            "legalities": {"standard": "not_legal", "legacy": "legal"},
            "set": "mmq",
            "set_id": "385e11a4-492b-4d07-b4a6-a1409ef829b8",
            "set_name": "Mercadian Masques",
            "collector_number": "91",
            "rarity": "common",
            "released_at": "1999-10-04",
            "border_color": "black",
            "finishes": ["nonfoil", "foil"],
            "games": ["paper", "mtgo"],
            "prices": {"usd": "0.25", "eur": null},
            "preview": {"source_uri": "", "source": "Wizards"},
            "new_field_from_the_future": true
        })
    }

    #[test]
    fn decodes_and_ignores_unknown_fields() {
        let card: Card = decode(fixture()).unwrap();
        assert_eq!(card.name, "Fathom Seer");
        assert_eq!(card.colors, Some(vec![Color::Blue]));
        assert_eq!(card.rarity, Rarity::Common);
        assert_eq!(card.legalities.get("legacy"), Some(&Legality::Legal));
        assert_eq!(card.prices.get("eur"), Some(&None));
        assert_eq!(
            card.released_at,
            NaiveDate::from_ymd_opt(1999, 10, 4)
        );
        assert!(card.client().is_none());
    }

    #[test]
    fn empty_preview_source_uri_is_none() {
        let card: Card = decode(fixture()).unwrap();
        let preview = card.preview.unwrap();
        assert_eq!(preview.source_uri, None);
        assert_eq!(preview.source.as_deref(), Some("Wizards"));
    }

    #[test]
    fn unknown_enum_values_decode() {
        let mut value = fixture();
        value["rarity"] = json!("ultra");
        value["colors"] = json!(["P"]);
        let card: Card = decode(value).unwrap();
        assert_eq!(card.rarity, Rarity::Unknown);
        assert_eq!(card.colors, Some(vec![Color::Unknown]));
    }

    #[test]
    fn missing_required_field_is_a_json_error() {
        let mut value = fixture();
        value.as_object_mut().unwrap().remove("name");
        let err = decode::<Card>(value).unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[tokio::test]
    async fn unbound_card_cannot_follow_links() {
        let card: Card = decode(fixture()).unwrap();
        let err = card.get_set().await.unwrap_err();
        assert!(matches!(
            err.kind(),
            scryer_error::ScryerErrorKind::InvalidArgument(_)
        ));
    }
}

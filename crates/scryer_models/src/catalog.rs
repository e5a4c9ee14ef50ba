//! Catalogs of card data values.

use serde::{Deserialize, Serialize};

/// A list of strings, such as every card name or every creature type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// API URI of this catalog
    #[serde(default)]
    pub uri: Option<String>,
    /// Number of values
    pub total_values: u64,
    /// The values
    pub data: Vec<String>,
}

/// Catalogs served under `/catalog/{name}`.
///
/// # Examples
///
/// ```
/// use scryer_models::CatalogKind;
/// use std::str::FromStr;
///
/// assert_eq!(CatalogKind::CreatureTypes.to_string(), "creature-types");
/// assert_eq!(CatalogKind::from_str("word-bank").unwrap(), CatalogKind::WordBank);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum CatalogKind {
    /// Every English card name
    CardNames,
    /// Every artist name
    ArtistNames,
    /// Every word that appears in a card name
    WordBank,
    /// Supertypes
    Supertypes,
    /// Card types
    CardTypes,
    /// Artifact subtypes
    ArtifactTypes,
    /// Battle subtypes
    BattleTypes,
    /// Creature subtypes
    CreatureTypes,
    /// Enchantment subtypes
    EnchantmentTypes,
    /// Land subtypes
    LandTypes,
    /// Planeswalker subtypes
    PlaneswalkerTypes,
    /// Spell subtypes
    SpellTypes,
    /// Printed power values
    Powers,
    /// Printed toughness values
    Toughnesses,
    /// Printed loyalty values
    Loyalties,
    /// Watermarks
    Watermarks,
    /// Keyword abilities
    KeywordAbilities,
    /// Keyword actions
    KeywordActions,
    /// Ability words
    AbilityWords,
    /// Flavor words
    FlavorWords,
}

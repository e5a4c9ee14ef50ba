//! Card symbols.

use crate::Color;
use serde::{Deserialize, Serialize};

/// A symbol that may appear in mana costs or rules text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSymbol {
    /// Plaintext symbol, such as `{W}`
    pub symbol: String,
    /// Alternate form without braces
    #[serde(default)]
    pub loose_variant: Option<String>,
    /// English description
    pub english: String,
    /// Can be written backwards
    #[serde(default)]
    pub transposable: bool,
    /// Represents mana
    #[serde(default)]
    pub represents_mana: bool,
    /// Mana value contribution
    #[serde(default)]
    pub mana_value: Option<f64>,
    /// Appears in mana costs
    #[serde(default)]
    pub appears_in_mana_costs: bool,
    /// Only used on funny cards
    #[serde(default)]
    pub funny: bool,
    /// Colours this symbol represents
    #[serde(default)]
    pub colors: Vec<Color>,
    /// Hybrid mana symbol
    #[serde(default)]
    pub hybrid: bool,
    /// Phyrexian mana symbol
    #[serde(default)]
    pub phyrexian: bool,
    /// Alternate Gatherer spellings
    #[serde(default)]
    pub gatherer_alternatives: Option<Vec<String>>,
    /// Image URI
    #[serde(default)]
    pub svg_uri: Option<String>,
}

//! Card search parameters.

use scryer_core::QueryParams;
use scryer_error::{InvalidArgumentError, ScryerResult};
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

/// How duplicate results are collapsed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Unique {
    /// One result per card
    #[default]
    Cards,
    /// One result per distinct artwork
    Art,
    /// Every print
    Prints,
}

/// Field results are sorted by.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortOrder {
    /// Card name
    #[default]
    Name,
    /// Set and collector number
    Set,
    /// Release date
    Released,
    /// Rarity
    Rarity,
    /// Colour
    Color,
    /// Price in US dollars
    Usd,
    /// Price in tix
    Tix,
    /// Price in euros
    Eur,
    /// Mana value
    Cmc,
    /// Power
    Power,
    /// Toughness
    Toughness,
    /// EDHREC rank
    Edhrec,
    /// Penny Dreadful rank
    Penny,
    /// Artist name
    Artist,
    /// Review order
    Review,
}

/// Sort direction.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
    /// Whatever suits the sort field
    #[default]
    Auto,
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Parameters of a full-text card search.
///
/// # Examples
///
/// ```
/// use scryer_models::{SearchParams, Unique};
///
/// let params = SearchParams::builder()
///     .q("e:m19")
///     .unique(Unique::Prints)
///     .page(2u32)
///     .build()
///     .unwrap();
/// let query = params.to_query();
/// assert_eq!(query.get("unique"), Some("prints"));
/// assert_eq!(query.get("page"), Some("2"));
///
/// let too_long = SearchParams::new("x".repeat(1001));
/// assert!(too_long.is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, derive_builder::Builder, derive_getters::Getters,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct SearchParams {
    /// Search query in Scryfall syntax
    q: String,
    /// Duplicate handling
    #[builder(default)]
    unique: Unique,
    /// Sort field
    #[builder(default)]
    order: SortOrder,
    /// Sort direction
    #[builder(default)]
    dir: SortDirection,
    /// Include extras such as tokens
    #[builder(default)]
    include_extras: bool,
    /// Include every language
    #[builder(default)]
    include_multilingual: bool,
    /// Include rare variants
    #[builder(default)]
    include_variations: bool,
    /// Page number, starting at 1
    #[builder(default = "1")]
    page: u32,
}

impl SearchParamsBuilder {
    /// Build and validate the parameters.
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error when `q` is missing or too long,
    /// or `page` is zero.
    #[track_caller]
    pub fn build(&self) -> ScryerResult<SearchParams> {
        let params = self
            .build_internal()
            .map_err(|e| InvalidArgumentError::new(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}

impl SearchParams {
    /// Longest query the API accepts, in characters.
    pub const MAX_QUERY_CHARS: usize = 1000;

    /// Creates a new builder.
    pub fn builder() -> SearchParamsBuilder {
        SearchParamsBuilder::default()
    }

    /// Parameters for `q` with every other field at its default.
    #[track_caller]
    pub fn new(q: impl Into<String>) -> ScryerResult<Self> {
        Self::builder().q(q).build()
    }

    /// Check the local preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError`] when `q` exceeds
    /// [`MAX_QUERY_CHARS`](Self::MAX_QUERY_CHARS) or `page` is zero.
    #[track_caller]
    pub fn validate(&self) -> Result<(), InvalidArgumentError> {
        let length = self.q.chars().count();
        if length > Self::MAX_QUERY_CHARS {
            return Err(InvalidArgumentError::new(format!(
                "query is {} characters; the limit is {}",
                length,
                Self::MAX_QUERY_CHARS
            )));
        }
        if self.page == 0 {
            return Err(InvalidArgumentError::new("page numbers start at 1"));
        }
        Ok(())
    }

    /// Render as query string parameters.
    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("q", &self.q)
            .with("unique", self.unique)
            .with("order", self.order)
            .with("dir", self.dir)
            .with("include_extras", self.include_extras)
            .with("include_multilingual", self.include_multilingual)
            .with("include_variations", self.include_variations)
            .with("page", self.page)
    }

    /// Rebuild parameters from decoded query pairs.
    ///
    /// Unknown keys, including `format`, are ignored.
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error when `q` is absent or a known
    /// key carries a value that does not parse.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> ScryerResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = Self::builder();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "q" => {
                    builder.q(value);
                }
                "unique" => {
                    builder.unique(parse_value::<Unique>(key, value)?);
                }
                "order" => {
                    builder.order(parse_value::<SortOrder>(key, value)?);
                }
                "dir" => {
                    builder.dir(parse_value::<SortDirection>(key, value)?);
                }
                "include_extras" => {
                    builder.include_extras(parse_value::<bool>(key, value)?);
                }
                "include_multilingual" => {
                    builder.include_multilingual(parse_value::<bool>(key, value)?);
                }
                "include_variations" => {
                    builder.include_variations(parse_value::<bool>(key, value)?);
                }
                "page" => {
                    builder.page(parse_value::<u32>(key, value)?);
                }
                other => debug!(key = other, "Ignoring search parameter"),
            }
        }
        builder.build()
    }

    /// Rebuild parameters from a search URI such as a list's `next_page`.
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error when `uri` is not a URL or its
    /// query does not describe a search.
    pub fn from_url(uri: &str) -> ScryerResult<Self> {
        let url = reqwest::Url::parse(uri)
            .map_err(|e| InvalidArgumentError::new(format!("invalid search URI {uri}: {e}")))?;
        Self::from_query_pairs(url.query_pairs())
    }
}

#[track_caller]
fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, InvalidArgumentError> {
    value
        .parse()
        .map_err(|_| InvalidArgumentError::new(format!("invalid value {value:?} for {key}")))
}

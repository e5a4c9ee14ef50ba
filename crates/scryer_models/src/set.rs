//! Set records.

use crate::decode::Bind;
use crate::{ApiList, CardRequests, SearchParams};
use chrono::NaiveDate;
use scryer_error::{InvalidArgumentError, ScryerResult};
use scryer_interface::ClientHandle;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A group of cards released together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Set {
    /// Scryfall id
    pub id: Uuid,
    /// Set code, usually three to five letters
    pub code: String,
    /// Magic Online code
    #[serde(default)]
    pub mtgo_code: Option<String>,
    /// Arena code
    #[serde(default)]
    pub arena_code: Option<String>,
    /// TCGplayer group id
    #[serde(default)]
    pub tcgplayer_id: Option<u32>,
    /// English name
    pub name: String,
    /// Set type, such as `core` or `expansion`
    pub set_type: String,
    /// Release date
    #[serde(default)]
    pub released_at: Option<NaiveDate>,
    /// Code of the block this set belongs to
    #[serde(default)]
    pub block_code: Option<String>,
    /// Name of the block this set belongs to
    #[serde(default)]
    pub block: Option<String>,
    /// Code of the parent set
    #[serde(default)]
    pub parent_set_code: Option<String>,
    /// Number of cards in the set
    pub card_count: u32,
    /// Denominator for collector numbers
    #[serde(default)]
    pub printed_size: Option<u32>,
    /// Digital only
    pub digital: bool,
    /// Foil only
    pub foil_only: bool,
    /// Nonfoil only
    pub nonfoil_only: bool,
    /// Scryfall web page
    pub scryfall_uri: String,
    /// API URI of this set
    pub uri: String,
    /// Icon URI
    pub icon_svg_uri: String,
    /// Search URI listing every card in the set
    pub search_uri: String,

    #[serde(skip)]
    client: Option<ClientHandle>,
}

impl Set {
    /// The handle attached to this set, if bound.
    pub fn client(&self) -> Option<&ClientHandle> {
        self.client.as_ref()
    }

    /// Fetch the first page of cards in this set.
    ///
    /// The set's `search_uri` is replayed as a card search.
    ///
    /// # Errors
    ///
    /// Fails with an invalid argument error when the set is not bound.
    pub async fn get_cards(&self) -> ScryerResult<ApiList> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| InvalidArgumentError::new("set is not bound to a client"))?;
        let params = SearchParams::from_url(&self.search_uri)?;
        client.search_cards(&params).await
    }
}

impl Bind for Set {
    fn bind(&mut self, handle: &ClientHandle) {
        self.client = Some(handle.clone());
    }
}

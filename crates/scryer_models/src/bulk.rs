//! Bulk data file descriptors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A downloadable export of Scryfall's database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkData {
    /// Scryfall id
    pub id: Uuid,
    /// API URI of this descriptor
    pub uri: String,
    /// Export type, such as `oracle_cards` or `all_cards`
    #[serde(rename = "type")]
    pub bulk_type: String,
    /// Human-readable name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Where to download the file
    pub download_uri: String,
    /// When the file was last regenerated
    pub updated_at: DateTime<Utc>,
    /// File size in bytes
    pub size: u64,
    /// MIME type of the file
    pub content_type: String,
    /// Content encoding of the file
    pub content_encoding: String,
}

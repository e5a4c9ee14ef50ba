//! `/bulk-data` endpoints.

use crate::BulkData;
use crate::decode::{DataList, decode};
use async_trait::async_trait;
use scryer_core::{Method, Route};
use scryer_error::ScryerResult;
use scryer_interface::Requester;

/// Bulk data file descriptors.
#[async_trait]
pub trait BulkDataRequests: Requester {
    /// List every bulk data file.
    async fn get_all_bulk_data(&self) -> ScryerResult<Vec<BulkData>> {
        let route = Route::fixed(Method::Get, "/bulk-data")?;
        let value = self.request(&route, None, None).await?;
        let list: DataList<BulkData> = decode(value)?;
        Ok(list.data)
    }

    /// Fetch a bulk data file by Scryfall id.
    async fn get_bulk_data_by_id(&self, id: &str) -> ScryerResult<BulkData> {
        let route = Route::get("/bulk-data/{id}", [("id", id.into())])?;
        decode(self.request(&route, None, None).await?)
    }

    /// Fetch a bulk data file by type, such as `oracle_cards`.
    async fn get_bulk_data_by_type(&self, bulk_type: &str) -> ScryerResult<BulkData> {
        let route = Route::get("/bulk-data/{type}", [("type", bulk_type.into())])?;
        decode(self.request(&route, None, None).await?)
    }
}

impl<R: Requester + ?Sized> BulkDataRequests for R {}

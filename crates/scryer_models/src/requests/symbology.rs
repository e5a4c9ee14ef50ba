//! `/symbology` endpoints.

use crate::CardSymbol;
use crate::decode::{DataList, decode};
use async_trait::async_trait;
use scryer_core::{Method, Route};
use scryer_error::ScryerResult;
use scryer_interface::Requester;

/// Card symbol listings.
#[async_trait]
pub trait SymbologyRequests: Requester {
    /// List every card symbol.
    async fn get_all_card_symbols(&self) -> ScryerResult<Vec<CardSymbol>> {
        let route = Route::fixed(Method::Get, "/symbology")?;
        let value = self.request(&route, None, None).await?;
        let list: DataList<CardSymbol> = decode(value)?;
        Ok(list.data)
    }
}

impl<R: Requester + ?Sized> SymbologyRequests for R {}

//! JSON to record decoding and client binding.

use scryer_error::{JsonError, ScryerResult};
use scryer_interface::ClientHandle;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a response body into a record.
///
/// # Errors
///
/// Returns a JSON error naming the schema mismatch.
pub fn decode<T: DeserializeOwned>(value: Value) -> ScryerResult<T> {
    serde_json::from_value(value).map_err(|e| JsonError::new(e.to_string()).into())
}

/// Records that keep a client handle for follow-up calls.
pub trait Bind {
    /// Attach `handle`, replacing any previous one.
    fn bind(&mut self, handle: &ClientHandle);
}

/// Decode and bind in one step.
pub(crate) fn decode_bound<T: DeserializeOwned + Bind>(
    value: Value,
    handle: &ClientHandle,
) -> ScryerResult<T> {
    let mut record: T = decode(value)?;
    record.bind(handle);
    Ok(record)
}

/// The `data` member of a list response, for endpoints returning a single record type.
#[derive(Debug, Deserialize)]
pub(crate) struct DataList<T> {
    pub(crate) data: Vec<T>,
}

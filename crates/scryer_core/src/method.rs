//! HTTP methods a route can use.

use serde::{Deserialize, Serialize};

/// HTTP method of a [`Route`](crate::Route).
///
/// # Examples
///
/// ```
/// use scryer_core::Method;
///
/// assert_eq!(Method::Get.to_string(), "GET");
/// assert_eq!("PATCH".parse::<Method>().unwrap(), Method::Patch);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

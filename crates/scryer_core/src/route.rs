//! Route descriptors: an HTTP method plus a path template with named parameters.
//!
//! A [`Route`] is validated when it is built, so every `{name}` placeholder in
//! its template is guaranteed a binding. Resolution percent-encodes string
//! values as a single path segment and renders integers and booleans as-is.
//! The [`identifier`](Route::identifier) keeps the template unresolved so that
//! log lines for `/cards/{id}` group together regardless of the id.

use crate::Method;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use scryer_error::MissingRouteParameterError;
use std::fmt;
use tracing::debug;

// RFC 3986 unreserved characters pass through, everything else is escaped.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Value bound to a path template placeholder.
///
/// # Examples
///
/// ```
/// use scryer_core::RouteParam;
///
/// assert_eq!(RouteParam::from("abc def").render(), "abc%20def");
/// assert_eq!(RouteParam::from(12345u32).render(), "12345");
/// assert_eq!(RouteParam::from(true).render(), "true");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RouteParam {
    /// Text, percent-encoded on resolution
    Str(String),
    /// Integer, rendered in decimal
    Int(i64),
    /// Boolean, rendered as `true`/`false`
    Bool(bool),
}

impl RouteParam {
    /// Text substituted into the path for this value.
    pub fn render(&self) -> String {
        match self {
            RouteParam::Str(value) => utf8_percent_encode(value, PATH_SEGMENT).to_string(),
            RouteParam::Int(value) => value.to_string(),
            RouteParam::Bool(value) => value.to_string(),
        }
    }
}

impl From<&str> for RouteParam {
    fn from(value: &str) -> Self {
        RouteParam::Str(value.to_string())
    }
}

impl From<String> for RouteParam {
    fn from(value: String) -> Self {
        RouteParam::Str(value)
    }
}

impl From<&String> for RouteParam {
    fn from(value: &String) -> Self {
        RouteParam::Str(value.clone())
    }
}

impl From<i64> for RouteParam {
    fn from(value: i64) -> Self {
        RouteParam::Int(value)
    }
}

impl From<i32> for RouteParam {
    fn from(value: i32) -> Self {
        RouteParam::Int(i64::from(value))
    }
}

impl From<u32> for RouteParam {
    fn from(value: u32) -> Self {
        RouteParam::Int(i64::from(value))
    }
}

impl From<bool> for RouteParam {
    fn from(value: bool) -> Self {
        RouteParam::Bool(value)
    }
}

/// Immutable description of one endpoint call.
///
/// # Examples
///
/// ```
/// use scryer_core::{Method, Route};
///
/// let route = Route::get("/cards/{id}", [("id", "abc def".into())]).unwrap();
/// assert_eq!(route.identifier(), "GET /cards/{id}");
/// assert_eq!(
///     route.url("https://api.scryfall.com"),
///     "https://api.scryfall.com/cards/abc%20def"
/// );
///
/// let missing = Route::new(Method::Get, "/sets/{code}", Vec::<(&str, _)>::new());
/// assert!(missing.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Route {
    /// HTTP method
    method: Method,
    /// Path template with `{name}` placeholders
    template: String,
    /// Bindings for the placeholders
    params: Vec<(String, RouteParam)>,
}

impl Route {
    /// Build a route, checking that every placeholder has a binding.
    ///
    /// # Errors
    ///
    /// Returns [`MissingRouteParameterError`] naming the first unbound placeholder.
    #[track_caller]
    pub fn new<K, I>(
        method: Method,
        template: impl Into<String>,
        params: I,
    ) -> Result<Self, MissingRouteParameterError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RouteParam)>,
    {
        let template = template.into();
        let params: Vec<(String, RouteParam)> =
            params.into_iter().map(|(k, v)| (k.into(), v)).collect();

        for name in placeholders(&template) {
            if !params.iter().any(|(k, _)| k == name) {
                return Err(MissingRouteParameterError::new(name, template.as_str()));
            }
        }

        for (key, _) in &params {
            if !placeholders(&template).any(|name| name == key) {
                debug!(template = %template, param = %key, "Route parameter has no placeholder");
            }
        }

        Ok(Self {
            method,
            template,
            params,
        })
    }

    /// Build a `GET` route.
    #[track_caller]
    pub fn get<K, I>(template: impl Into<String>, params: I) -> Result<Self, MissingRouteParameterError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, RouteParam)>,
    {
        Self::new(Method::Get, template, params)
    }

    /// Build a route whose template has no placeholders.
    #[track_caller]
    pub fn fixed(
        method: Method,
        template: impl Into<String>,
    ) -> Result<Self, MissingRouteParameterError> {
        Self::new(method, template, Vec::<(String, RouteParam)>::new())
    }

    /// `"<METHOD> <template>"`, with placeholders left unresolved.
    pub fn identifier(&self) -> String {
        format!("{} {}", self.method, self.template)
    }

    /// The path with every placeholder substituted.
    pub fn resolved_path(&self) -> String {
        let mut resolved = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            let name = &rest[open + 1..open + close];
            resolved.push_str(&rest[..open]);
            match self.params.iter().find(|(k, _)| k == name) {
                Some((_, value)) => resolved.push_str(&value.render()),
                // Unreachable for routes built through `new`
                None => resolved.push_str(&rest[open..=open + close]),
            }
            rest = &rest[open + close + 1..];
        }

        resolved.push_str(rest);
        resolved
    }

    /// Full URL against the given origin.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.resolved_path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// Names of the `{name}` placeholders in a template, in order.
fn placeholders(template: &str) -> impl Iterator<Item = &str> {
    let mut rest = template;
    std::iter::from_fn(move || {
        let open = rest.find('{')?;
        let close = rest[open..].find('}')?;
        let name = &rest[open + 1..open + close];
        rest = &rest[open + close + 1..];
        Some(name)
    })
}

//! Capability traits.

use crate::{TransportRequest, TransportResponse};
use async_trait::async_trait;
use scryer_core::{QueryParams, Route};
use scryer_error::{ScryerResult, TransportError};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Something that can perform a described request and return its JSON body.
///
/// This is the narrow capability records hold for follow-up calls (a card
/// fetching its set, a list fetching its next page). Endpoint helpers are
/// provided on top of it for every implementor.
#[async_trait]
pub trait Requester: Send + Sync {
    /// Perform `route` with optional query and JSON body parameters.
    async fn request(
        &self,
        route: &Route,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> ScryerResult<Value>;

    /// A shared handle to this requester, attached to decoded records.
    fn handle(&self) -> ClientHandle;
}

/// Shared, cloneable reference to a [`Requester`].
#[derive(Clone)]
pub struct ClientHandle(Arc<dyn Requester>);

impl ClientHandle {
    /// Wrap a requester.
    pub fn new<R: Requester + 'static>(requester: R) -> Self {
        Self(Arc::new(requester))
    }

    /// Wrap an already shared requester.
    pub fn from_arc(requester: Arc<dyn Requester>) -> Self {
        Self(requester)
    }

    /// The underlying requester.
    pub fn requester(&self) -> &dyn Requester {
        self.0.as_ref()
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle").finish_non_exhaustive()
    }
}

#[async_trait]
impl Requester for ClientHandle {
    async fn request(
        &self,
        route: &Route,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> ScryerResult<Value> {
        self.0.request(route, query, body).await
    }

    fn handle(&self) -> ClientHandle {
        self.clone()
    }
}

/// Sends a single HTTP attempt.
///
/// Retries, rate limiting and status classification happen above this
/// layer; a transport only reports a status and body, or why it got none.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;

    /// Release pooled connections. Must be safe to call repeatedly.
    async fn close(&self);
}

//! The request pipeline.

use crate::decode::map_error_response;
use crate::transport::ReqwestTransport;
use async_trait::async_trait;
use scryer_core::{QueryParams, Route};
use scryer_error::{ExhaustedRetriesError, ScryerResult, TransportError};
use scryer_interface::{ClientHandle, Requester, Transport, TransportRequest};
use scryer_rate_limit::{AttemptOutcome, AttemptState, RateGate, RetryPolicy, ScryerConfig, Step};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Client for the Scryfall API.
///
/// Cloning is cheap; clones share the rate gate and the transport, so the
/// quota holds across every clone and every record bound to one.
#[derive(Clone)]
pub struct ScryerClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    base_url: String,
    gate: RateGate,
    policy: RetryPolicy,
    transport: Arc<dyn Transport>,
}

impl ScryerClient {
    /// Client with the bundled defaults, without reading any file.
    pub fn new() -> Self {
        Self::from_config(&ScryerConfig::default())
    }

    /// Client with configuration loaded from the usual locations.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a config file cannot be parsed.
    pub fn load() -> ScryerResult<Self> {
        Ok(Self::from_config(&ScryerConfig::load()?))
    }

    /// Client for the given configuration, sending through reqwest.
    pub fn from_config(config: &ScryerConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::new(config.http.clone()));
        Self::with_transport(transport, config)
    }

    /// Client for the given configuration, sending through `transport`.
    pub fn with_transport(transport: Arc<dyn Transport>, config: &ScryerConfig) -> Self {
        info!(
            base_url = %config.http.base_url,
            max_calls = config.rate_limit.max_calls_per_window,
            max_attempts = config.retry.max_attempts,
            "Creating Scryfall client"
        );
        Self {
            inner: Arc::new(ClientInner {
                base_url: config.http.base_url.clone(),
                gate: RateGate::from_config(&config.rate_limit),
                policy: RetryPolicy::from_config(&config.retry, config.rate_limit.cooldown_secs),
                transport,
            }),
        }
    }

    /// The shared rate gate.
    pub fn gate(&self) -> &RateGate {
        &self.inner.gate
    }

    /// The retry policy applied to every call.
    pub fn policy(&self) -> &RetryPolicy {
        &self.inner.policy
    }

    /// Origin every route resolves against.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Perform one logical call.
    ///
    /// Every attempt waits for the rate gate. 429 responses force a gate
    /// cooldown and 5xx responses or transport failures back off before the
    /// next attempt; any other non-2xx is raised at once.
    ///
    /// # Errors
    ///
    /// - [`scryer_error::HttpError`] for a terminal non-2xx response
    /// - [`ExhaustedRetriesError`] when every attempt hit 429 or 5xx
    /// - [`TransportError`] when the last attempt got no response
    /// - a JSON error when a 2xx body is not JSON
    #[instrument(skip(self, route, query, body), fields(route = %route.identifier()))]
    pub async fn execute(
        &self,
        route: &Route,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> ScryerResult<Value> {
        let identifier = route.identifier();
        let url = route.url(&self.inner.base_url);
        let request = TransportRequest::builder()
            .method(*route.method())
            .url(url.clone())
            .query(query.cloned().unwrap_or_default())
            .body(body.cloned())
            .build()
            .map_err(|e| TransportError::new(format!("{identifier}: {e}")))?;

        let policy = &self.inner.policy;
        let mut state = AttemptState::new();

        while policy.can_attempt(&state) {
            self.inner.gate.await_slot().await;
            let attempt = state.attempts() + 1;
            debug!(attempt, url = %url, "Sending request");

            let outcome = match self.inner.transport.send(request.clone()).await {
                Ok(response) => policy.classify(response.status, response.body)?,
                Err(err) => AttemptOutcome::TransportFailure {
                    message: err.message,
                },
            };

            match policy.advance(&mut state, outcome) {
                Step::Return(value) => {
                    debug!(attempt, "Request succeeded");
                    return Ok(value);
                }
                Step::Raise { status, body } => {
                    let err = map_error_response(&identifier, status, &body);
                    error!(
                        method = %route.method(),
                        url = %url,
                        status,
                        code = %err.envelope.code,
                        "Request failed"
                    );
                    return Err(err.into());
                }
                Step::Cooldown { delay } => {
                    warn!(
                        route = %identifier,
                        status = 429,
                        attempt,
                        retry_in_ms = delay.as_millis() as u64,
                        "Rate limited by the API, cooling down"
                    );
                    self.inner.gate.force_cooldown(delay);
                }
                Step::Backoff { delay } => {
                    match state.last_server_error() {
                        Some((status, _)) => warn!(
                            route = %identifier,
                            status = *status,
                            attempt,
                            retry_in_ms = delay.as_millis() as u64,
                            "Server error, backing off"
                        ),
                        None => warn!(
                            route = %identifier,
                            attempt,
                            retry_in_ms = delay.as_millis() as u64,
                            "Transport failure, backing off"
                        ),
                    }
                    tokio::time::sleep(delay).await;
                }
                Step::FailTransport { message } => {
                    error!(
                        method = %route.method(),
                        url = %url,
                        attempts = state.attempts(),
                        error = %message,
                        "Request failed without a response"
                    );
                    return Err(TransportError::new(format!("{identifier}: {message}")).into());
                }
            }
        }

        let last_error = state
            .last_server_error()
            .map(|(status, body)| map_error_response(&identifier, *status, body));
        error!(
            method = %route.method(),
            url = %url,
            attempts = state.attempts(),
            "Exhausted retries"
        );
        Err(ExhaustedRetriesError::new(identifier, state.attempts(), last_error).into())
    }

    /// Release the transport's connections.
    ///
    /// Safe to call more than once, and before any request was made. A
    /// request issued afterwards opens a fresh connection pool.
    pub async fn close(&self) {
        debug!("Closing Scryfall client");
        self.inner.transport.close().await;
    }
}

impl Default for ScryerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScryerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScryerClient")
            .field("base_url", &self.inner.base_url)
            .field("gate", &self.inner.gate)
            .field("policy", &self.inner.policy)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Requester for ScryerClient {
    async fn request(
        &self,
        route: &Route,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> ScryerResult<Value> {
        self.execute(route, query, body).await
    }

    fn handle(&self) -> ClientHandle {
        ClientHandle::new(self.clone())
    }
}

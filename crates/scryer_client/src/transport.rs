//! HTTP transport backed by reqwest.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use scryer_core::Method;
use scryer_error::TransportError;
use scryer_interface::{Transport, TransportRequest, TransportResponse};
use scryer_rate_limit::HttpConfig;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, instrument};

/// Sends requests with a reqwest client built on first use.
///
/// [`close`](Transport::close) drops the client and its connection pool;
/// the next request builds a new one.
#[derive(Debug)]
pub struct ReqwestTransport {
    config: HttpConfig,
    client: Mutex<Option<reqwest::Client>>,
}

impl ReqwestTransport {
    /// Create a transport; no connection is made until the first request.
    pub fn new(config: HttpConfig) -> Self {
        Self {
            config,
            client: Mutex::new(None),
        }
    }

    /// True while a client (and its pool) is alive.
    pub fn is_open(&self) -> bool {
        self.client
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn client(&self) -> Result<reqwest::Client, TransportError> {
        let mut slot = self.client.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        debug!(user_agent = %self.config.user_agent, "Building HTTP client");
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(self.config.user_agent.as_str())
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()
            .map_err(|e| TransportError::new(format!("Failed to build HTTP client: {}", e)))?;
        *slot = Some(client.clone());
        Ok(client)
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let client = self.client()?;

        let mut builder = client
            .request(to_reqwest(*request.method()), request.url())
            .query(request.query().as_pairs());
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(format!("Request failed: {}", e)))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response body: {}", e)))?;

        debug!(status, bytes = body.len(), "Received response");
        Ok(TransportResponse::new(status, body))
    }

    async fn close(&self) {
        let previous = self
            .client
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            debug!("Closed HTTP client");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn close_is_idempotent_without_requests() {
        let transport = ReqwestTransport::new(HttpConfig::default());
        transport.close().await;
        transport.close().await;
        assert!(!transport.is_open());
    }

    #[tokio::test]
    async fn client_is_built_lazily_and_rebuilt_after_close() {
        let transport = ReqwestTransport::new(HttpConfig::default());
        assert!(!transport.is_open());

        transport.client().unwrap();
        assert!(transport.is_open());

        transport.close().await;
        assert!(!transport.is_open());

        transport.client().unwrap();
        assert!(transport.is_open());
    }
}

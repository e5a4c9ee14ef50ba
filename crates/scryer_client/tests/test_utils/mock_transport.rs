//! Scripted transport for pipeline tests.

use async_trait::async_trait;
use scryer_error::TransportError;
use scryer_interface::{Transport, TransportRequest, TransportResponse};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::Instant;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Answer with this status and body
    Status(u16, String),
    /// Fail without a response
    Fail(String),
}

impl MockReply {
    /// 200 with a JSON body.
    pub fn ok(body: serde_json::Value) -> Self {
        MockReply::Status(200, body.to_string())
    }
}

/// A request as the transport received it, with the (paused) time it arrived.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub at: Instant,
    pub request: TransportRequest,
}

/// Transport answering from a queue, then from an optional fallback reply.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    fallback: Option<MockReply>,
    requests: Mutex<Vec<RecordedRequest>>,
    closes: AtomicUsize,
}

impl MockTransport {
    /// Transport replying with `replies` in order.
    pub fn new_sequence(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Self::default()
        }
    }

    /// Transport replying with `reply` to every request.
    #[allow(dead_code)]
    pub fn new_always(reply: MockReply) -> Self {
        Self {
            fallback: Some(reply),
            ..Self::default()
        }
    }

    /// Number of times send() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of times close() was called.
    #[allow(dead_code)]
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            at: Instant::now(),
            request,
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fallback.clone());

        match reply {
            Some(MockReply::Status(status, body)) => Ok(TransportResponse::new(status, body)),
            Some(MockReply::Fail(message)) => Err(TransportError::new(message)),
            None => Err(TransportError::new(format!(
                "Mock sequence exhausted (call {})",
                self.call_count()
            ))),
        }
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

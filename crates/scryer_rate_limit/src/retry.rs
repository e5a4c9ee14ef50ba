//! Attempt state machine for one logical call.
//!
//! Each HTTP attempt is classified into an [`AttemptOutcome`]. The
//! [`RetryPolicy`] folds that outcome into the call's [`AttemptState`] and
//! answers with the next [`Step`]. No I/O happens here; the pipeline performs
//! the steps (sleeping, forcing a gate cooldown, raising), which keeps every
//! transition testable without a network.

use crate::RetryConfig;
use scryer_error::JsonError;
use serde_json::Value;
use std::time::Duration;

/// Classified result of a single HTTP attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// 2xx with a decoded JSON body
    Success(Value),
    /// 5xx; retried after a backoff
    RetryableServerError {
        /// HTTP status
        status: u16,
        /// Raw response body
        body: String,
    },
    /// 429; retried after the gate cools down
    RateLimited {
        /// How long the gate stays closed
        cooldown: Duration,
    },
    /// Any other non-2xx; raised without retry
    TerminalError {
        /// HTTP status
        status: u16,
        /// Raw response body
        body: String,
    },
    /// No HTTP response at all
    TransportFailure {
        /// Transport error message
        message: String,
    },
}

/// What the pipeline should do after an attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Finish successfully with this body
    Return(Value),
    /// Map the response to a typed error and raise it
    Raise {
        /// HTTP status
        status: u16,
        /// Raw response body
        body: String,
    },
    /// Force the rate gate closed for `delay`, then attempt again
    Cooldown {
        /// Cooldown length
        delay: Duration,
    },
    /// Sleep for `delay`, then attempt again
    Backoff {
        /// Backoff length
        delay: Duration,
    },
    /// Give up with a transport error
    FailTransport {
        /// Transport error message
        message: String,
    },
}

/// Progress of one logical call across its attempts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttemptState {
    attempts: u32,
    last_server_error: Option<(u16, String)>,
}

impl AttemptState {
    /// Fresh state, no attempts made.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attempts already classified.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Status and body of the most recent 5xx, cleared by any other outcome.
    pub fn last_server_error(&self) -> Option<&(u16, String)> {
        self.last_server_error.as_ref()
    }
}

/// Bounded retry policy: 429 cools the gate, 5xx and transport failures back off.
///
/// # Examples
///
/// ```
/// use scryer_rate_limit::{AttemptOutcome, AttemptState, RetryPolicy, Step};
/// use std::time::Duration;
///
/// let policy = RetryPolicy::default();
/// let mut state = AttemptState::new();
///
/// let step = policy.advance(
///     &mut state,
///     AttemptOutcome::RetryableServerError { status: 503, body: String::new() },
/// );
/// assert_eq!(step, Step::Backoff { delay: Duration::from_secs(1) });
/// assert!(policy.can_attempt(&state));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_base: Duration,
    backoff_step: Duration,
    rate_limit_cooldown: Duration,
}

impl RetryPolicy {
    /// Create a policy; `max_attempts` is raised to at least one.
    pub fn new(
        max_attempts: u32,
        backoff_base: Duration,
        backoff_step: Duration,
        rate_limit_cooldown: Duration,
    ) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_base,
            backoff_step,
            rate_limit_cooldown,
        }
    }

    /// Create a policy from the retry and rate limit configuration sections.
    pub fn from_config(retry: &RetryConfig, cooldown_secs: u64) -> Self {
        Self::new(
            retry.max_attempts,
            Duration::from_millis(retry.backoff_base_ms),
            Duration::from_millis(retry.backoff_step_ms),
            Duration::from_secs(cooldown_secs),
        )
    }

    /// Maximum attempts per call.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay after the failed attempt with 0-based index `attempt`.
    ///
    /// With the defaults this is 1s, 3s, 5s, ...
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.backoff_base + self.backoff_step * attempt
    }

    /// True while the call may make another attempt.
    pub fn can_attempt(&self, state: &AttemptState) -> bool {
        state.attempts < self.max_attempts
    }

    /// Classify an HTTP response into an attempt outcome.
    ///
    /// # Errors
    ///
    /// Returns [`JsonError`] when a 2xx body is not valid JSON.
    #[track_caller]
    pub fn classify(&self, status: u16, body: String) -> Result<AttemptOutcome, JsonError> {
        Ok(match status {
            429 => AttemptOutcome::RateLimited {
                cooldown: self.rate_limit_cooldown,
            },
            s if s >= 500 => AttemptOutcome::RetryableServerError { status, body },
            200..=299 => AttemptOutcome::Success(serde_json::from_str(&body)?),
            _ => AttemptOutcome::TerminalError { status, body },
        })
    }

    /// Record an attempt's outcome and decide the next step.
    pub fn advance(&self, state: &mut AttemptState, outcome: AttemptOutcome) -> Step {
        let attempt = state.attempts;
        state.attempts += 1;

        match outcome {
            AttemptOutcome::Success(body) => {
                state.last_server_error = None;
                Step::Return(body)
            }
            AttemptOutcome::TerminalError { status, body } => {
                state.last_server_error = None;
                Step::Raise { status, body }
            }
            AttemptOutcome::RateLimited { cooldown } => {
                state.last_server_error = None;
                Step::Cooldown { delay: cooldown }
            }
            AttemptOutcome::RetryableServerError { status, body } => {
                state.last_server_error = Some((status, body));
                Step::Backoff {
                    delay: self.backoff(attempt),
                }
            }
            AttemptOutcome::TransportFailure { message } => {
                state.last_server_error = None;
                if self.can_attempt(state) {
                    Step::Backoff {
                        delay: self.backoff(attempt),
                    }
                } else {
                    Step::FailTransport { message }
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(
            &RetryConfig::default(),
            crate::RateLimitConfig::default().cooldown_secs,
        )
    }
}

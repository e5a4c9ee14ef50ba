//! Global request quota shared by every call of one client.
//!
//! The gate tracks how many calls remain in the current window. Callers pass
//! through an exclusive section one at a time, where the window is either
//! rolled over, waited out, or left alone. The slot itself is taken after the
//! section is released, so a burst of callers can all pass the check before
//! any of their decrements land; the quota is approximate under bursts.

use crate::RateLimitConfig;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

/// Per-window request quota with a forced cooldown for server overload.
///
/// # Example
///
/// ```rust
/// use scryer_rate_limit::RateGate;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let gate = RateGate::new(10, Duration::from_secs(1));
/// gate.await_slot().await;
/// assert_eq!(gate.remaining(), 9);
/// # }
/// ```
#[derive(Debug)]
pub struct RateGate {
    max_calls: u32,
    window: Duration,
    remaining: AtomicU32,
    reset_at: Mutex<Instant>,
    // Serializes the reset-or-wait decision; never guards `reset_at` itself
    turnstile: tokio::sync::Mutex<()>,
}

impl RateGate {
    /// Create a gate allowing `max_calls` per `window`.
    pub fn new(max_calls: u32, window: Duration) -> Self {
        debug!(max_calls, window_ms = window.as_millis() as u64, "Creating rate gate");
        Self {
            max_calls,
            window,
            remaining: AtomicU32::new(max_calls),
            reset_at: Mutex::new(Instant::now()),
            turnstile: tokio::sync::Mutex::new(()),
        }
    }

    /// Create a gate from configuration.
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(
            config.max_calls_per_window,
            Duration::from_millis(config.window_ms),
        )
    }

    /// Wait until a slot is available, then consume it.
    ///
    /// Cancelling the returned future while it waits leaves the quota untouched.
    #[instrument(level = "trace", skip(self))]
    pub async fn await_slot(&self) {
        {
            let _turn = self.turnstile.lock().await;
            let reset_at = self.reset_at();

            if reset_at <= Instant::now() {
                self.reset_window();
            } else if self.remaining.load(Ordering::Acquire) == 0 {
                debug!(
                    wait_ms = reset_at.saturating_duration_since(Instant::now()).as_millis() as u64,
                    "Quota exhausted, waiting for window reset"
                );
                tokio::time::sleep_until(reset_at).await;
                self.reset_window();
            }
        }

        let _ = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                Some(n.saturating_sub(1))
            });
    }

    /// Drop the remaining quota to zero until `delay` from now.
    ///
    /// Called when the remote answers 429; overrides the normal window.
    pub fn force_cooldown(&self, delay: Duration) {
        warn!(delay_ms = delay.as_millis() as u64, "Forcing rate gate cooldown");
        self.remaining.store(0, Ordering::Release);
        *self.reset_at.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now() + delay;
    }

    /// Slots left in the current window.
    pub fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }

    /// When the current window (or cooldown) ends.
    pub fn reset_at(&self) -> Instant {
        *self.reset_at.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Maximum slots per window.
    pub fn max_calls(&self) -> u32 {
        self.max_calls
    }

    /// Window length.
    pub fn window(&self) -> Duration {
        self.window
    }

    fn reset_window(&self) {
        self.remaining.store(self.max_calls, Ordering::Release);
        *self.reset_at.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now() + self.window;
    }
}

impl Default for RateGate {
    fn default() -> Self {
        Self::from_config(&RateLimitConfig::default())
    }
}

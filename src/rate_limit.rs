//! Sliding-window rate limiting for outbound API calls.
//!
//! Both remote APIs allow at most 10 requests per second, so every client
//! routes its calls through a [`RateLimiter`] before touching the network.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::sleep;

/// Caps how many calls may start within any rolling time window.
///
/// `acquire` suspends the caller until the window admits another call; it
/// never rejects. Each client owns its own instance, so budgets stay
/// independent per remote service and per test.
#[derive(Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_calls: usize, window: Duration) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_calls)),
            window,
        }
    }

    /// Limiter with a one-second rolling window.
    pub fn per_second(max_calls: usize) -> Self {
        Self::new(max_calls, Duration::from_secs(1))
    }

    /// Waits until a call may start under the rolling window.
    ///
    /// The permit returns to the pool once the window has elapsed, so the
    /// permits out at any instant equal the calls started within the
    /// trailing window.
    pub async fn acquire(&self) {
        let permit = self
            .semaphore
            .clone()
            .acquire_owned()
            .await
            .expect("rate limiter semaphore closed");

        let window = self.window;
        tokio::spawn(async move {
            sleep(window).await;
            drop(permit);
        });
    }
}

//! Bounded exponential backoff for remote API calls.

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{RemoteCallError, Result, TranslatorError};

// == Retry Policy ==
/// How many times a remote call is attempted and how long to wait in between.
///
/// The wait after failed attempt `n` (0-based) is
/// `min(initial_delay * exponential_base^n, max_delay)`, with no jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first one (values below 1 act as 1)
    pub max_attempts: u32,
    /// Wait after the first failure
    pub initial_delay: Duration,
    /// Growth factor between consecutive waits
    pub exponential_base: f64,
    /// Upper bound for any single wait
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(500),
            exponential_base: 2.0,
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Backoff before the retry that follows failed attempt `attempt`.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let delay = self.initial_delay.as_secs_f64() * self.exponential_base.powi(exponent);
        let cap = self.max_delay.as_secs_f64();

        if delay.is_nan() || delay >= cap {
            self.max_delay
        } else if delay <= 0.0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(delay)
        }
    }

    /// Runs `call` until it succeeds or the attempts are used up.
    ///
    /// Sleeps between attempts but never after the last one. On exhaustion
    /// the last failure is returned as the source of
    /// [`TranslatorError::ProviderExhausted`].
    pub async fn run<T, F, Fut>(&self, mut call: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, RemoteCallError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt: u32 = 0;

        loop {
            let error = match call().await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };
            attempt += 1;

            warn!(
                "Translation attempt {}/{} failed: {}",
                attempt, max_attempts, error
            );

            if attempt >= max_attempts {
                return Err(TranslatorError::ProviderExhausted {
                    attempts: attempt,
                    source: error,
                });
            }

            let delay = self.backoff_delay(attempt - 1);
            debug!(
                "Retrying in {:.2}s (exponential backoff, attempt {})",
                delay.as_secs_f64(),
                attempt
            );
            tokio::time::sleep(delay).await;
        }
    }
}

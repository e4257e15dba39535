//! Transient-failure retry for the confirm path
//!
//! The reservation store can refuse an insert for reasons that have
//! nothing to do with the booking itself: another writer holds the
//! court's bucket, a transaction timed out. Nothing is persisted until
//! that final atomic insert, so the engine re-runs it a bounded number
//! of times before giving up.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use crate::domain::DomainResult;

/// Bounded exponential backoff for transient storage failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles after each attempt.
    pub initial_delay: Duration,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(1),
        }
    }
}

/// Re-run `operation` while it fails with a transient error.
///
/// Only `DomainError::is_transient` failures are retried. Domain
/// rejections (`SlotConflict`, `CoachNotFound`, an invalid window) bail
/// on first occurrence: retrying the same request cannot change them.
pub async fn retry_transient<T, F, Fut>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> DomainResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let mut delay = policy.initial_delay;
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!(operation = operation_name, attempt, "Succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) if err.is_transient() && attempt < policy.max_attempts => {
                warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %err,
                    retry_in_ms = delay.as_millis() as u64,
                    "Transient storage failure, retrying"
                );
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(policy.max_delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

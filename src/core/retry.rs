//! Retry policy: which status codes are retried and how long to wait between
//! attempts.

use std::time::Duration;
use tonic::Code;

/// Retry policy applied underneath a call's timeout.
///
/// Backoff grows exponentially: `min(initial * multiplier^attempt, max)`.
/// Retrying stops once the next sleep would run past `deadline`, measured from
/// the first attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Status codes considered transient.
    pub retryable: Vec<Code>,
    /// Delay before the first retry.
    pub initial_backoff: Duration,
    /// Upper bound for a single delay.
    pub max_backoff: Duration,
    /// Growth factor between consecutive delays.
    pub multiplier: f64,
    /// Total time budget for retrying.
    pub deadline: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retryable: vec![Code::Unavailable],
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(60),
            multiplier: 1.3,
            deadline: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn disabled() -> Self {
        Self {
            retryable: Vec::new(),
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            multiplier: 1.0,
            deadline: Duration::ZERO,
        }
    }

    /// Replace the set of retryable codes.
    pub fn with_retryable(mut self, codes: impl IntoIterator<Item = Code>) -> Self {
        self.retryable = codes.into_iter().collect();
        self
    }

    /// Set the initial delay.
    pub fn with_initial_backoff(mut self, delay: Duration) -> Self {
        self.initial_backoff = delay;
        self
    }

    /// Set the maximum single delay.
    pub fn with_max_backoff(mut self, delay: Duration) -> Self {
        self.max_backoff = delay;
        self
    }

    /// Set the growth factor.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the overall retry budget.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// Whether a failed attempt with `code` may be retried.
    ///
    /// `DeadlineExceeded` is always terminal.
    pub fn is_retryable(&self, code: Code) -> bool {
        code != Code::DeadlineExceeded && self.retryable.contains(&code)
    }

    /// Delay before retry number `attempt` (0-based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = self.multiplier.max(1.0).powi(attempt.min(i32::MAX as u32) as i32);
        let delay = self.initial_backoff.as_secs_f64() * factor;
        if !delay.is_finite() || delay >= self.max_backoff.as_secs_f64() {
            return self.max_backoff;
        }
        Duration::from_secs_f64(delay)
    }

    /// Decide whether to retry after `elapsed` time and `attempt` failures.
    ///
    /// Returns the delay to sleep, or `None` when the error is terminal.
    pub fn next_delay(&self, code: Code, attempt: u32, elapsed: Duration) -> Option<Duration> {
        if !self.is_retryable(code) {
            return None;
        }
        let delay = self.backoff(attempt);
        if elapsed + delay > self.deadline {
            return None;
        }
        Some(delay)
    }
}

//! Retry Mechanism Module
//!
//! Bounded retries with exponential backoff and jitter, usable from both the
//! async and the blocking transport.

use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;

use crate::defaults;
use trophy_spec::TrophyError;

/// Retry policy configuration
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, the first one included
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    /// Backoff multiplier (for exponential backoff)
    pub backoff_multiplier: f64,
    /// Whether to add jitter to delays
    pub use_jitter: bool,
    /// Maximum jitter percentage (0.0 to 1.0)
    pub jitter_factor: f64,
    /// Custom retry condition function
    pub retry_condition: Option<fn(&TrophyError) -> bool>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: defaults::retry::INITIAL_DELAY,
            max_delay: defaults::retry::MAX_DELAY,
            backoff_multiplier: defaults::retry::BACKOFF_MULTIPLIER,
            use_jitter: true,
            jitter_factor: defaults::retry::JITTER_FACTOR,
            retry_condition: None,
        }
    }
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy allowing `retries` retries after the first attempt.
    pub fn with_retries(retries: u32) -> Self {
        Self::default().with_max_attempts(retries.saturating_add(1))
    }

    /// Set maximum attempts
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set initial delay
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set maximum delay
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set backoff multiplier
    pub const fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Enable or disable jitter
    pub const fn with_jitter(mut self, use_jitter: bool) -> Self {
        self.use_jitter = use_jitter;
        self
    }

    /// Set jitter factor
    pub const fn with_jitter_factor(mut self, factor: f64) -> Self {
        self.jitter_factor = factor.clamp(0.0, 1.0);
        self
    }

    /// Set custom retry condition
    pub fn with_retry_condition(mut self, condition: fn(&TrophyError) -> bool) -> Self {
        self.retry_condition = Some(condition);
        self
    }

    /// Check if an error should be retried
    pub fn should_retry(&self, error: &TrophyError) -> bool {
        if let Some(condition) = self.retry_condition {
            condition(error)
        } else {
            error.is_retryable()
        }
    }

    /// Calculate the delay after failed attempt number `attempt` (0-based)
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        let base_delay =
            self.initial_delay.as_millis() as f64 * self.backoff_multiplier.powi(attempt as i32);

        let delay = Duration::from_millis(base_delay as u64).min(self.max_delay);

        if self.use_jitter {
            self.add_jitter(delay)
        } else {
            delay
        }
    }

    fn add_jitter(&self, delay: Duration) -> Duration {
        let jitter_range = delay.as_millis() as f64 * self.jitter_factor;
        if jitter_range <= 0.0 {
            return delay;
        }
        let mut rng = rand::thread_rng();
        let jitter = rng.gen_range(-jitter_range..=jitter_range);

        let new_delay = delay.as_millis() as f64 + jitter;
        Duration::from_millis(new_delay.max(0.0) as u64)
    }

    /// Attempts actually made; a zero setting still makes one attempt.
    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Decide what to do after failed attempt `attempt` (0-based): `None` to
    /// give up, otherwise the delay before the next attempt.
    fn next_delay(&self, attempt: u32, error: &TrophyError) -> Option<Duration> {
        if attempt + 1 >= self.attempts() || !self.should_retry(error) {
            None
        } else {
            Some(self.calculate_delay(attempt))
        }
    }
}

/// Retry executor that handles the actual retry logic
#[derive(Debug, Clone)]
pub struct RetryExecutor {
    policy: RetryPolicy,
}

impl RetryExecutor {
    /// Create a new retry executor
    pub const fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Execute an async operation with retry logic
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T, TrophyError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, TrophyError>>,
    {
        self.execute_with_observer(operation, |_, _, _| {}).await
    }

    /// Like [`execute`](Self::execute), calling `observer(retry, delay, error)`
    /// before each retry. `retry` counts from 1.
    pub async fn execute_with_observer<F, Fut, T, O>(
        &self,
        mut operation: F,
        mut observer: O,
    ) -> Result<T, TrophyError>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, TrophyError>>,
        O: FnMut(u32, Duration, &TrophyError),
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(error) => {
                    let Some(delay) = self.policy.next_delay(attempt, &error) else {
                        return Err(error);
                    };
                    attempt += 1;
                    observer(attempt, delay, &error);
                    sleep(delay).await;
                }
            }
        }
    }

    /// Execute a blocking operation with retry logic, sleeping on the
    /// calling thread between attempts.
    pub fn execute_blocking<F, T>(&self, operation: F) -> Result<T, TrophyError>
    where
        F: FnMut() -> Result<T, TrophyError>,
    {
        self.execute_blocking_with_observer(operation, |_, _, _| {})
    }

    pub fn execute_blocking_with_observer<F, T, O>(
        &self,
        mut operation: F,
        mut observer: O,
    ) -> Result<T, TrophyError>
    where
        F: FnMut() -> Result<T, TrophyError>,
        O: FnMut(u32, Duration, &TrophyError),
    {
        let mut attempt = 0;
        loop {
            match operation() {
                Ok(result) => return Ok(result),
                Err(error) => {
                    let Some(delay) = self.policy.next_delay(attempt, &error) else {
                        return Err(error);
                    };
                    attempt += 1;
                    observer(attempt, delay, &error);
                    std::thread::sleep(delay);
                }
            }
        }
    }
}

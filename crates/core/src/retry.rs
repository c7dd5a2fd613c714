//! Fixed-delay retry policy for storage operations
//!
//! Transient store faults (connection resets and the like) are retried
//! a bounded number of times with a fixed delay between attempts. The
//! policy is an explicit value wrapped around each operation rather
//! than behavior baked into the store itself.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;

/// Default attempt bound, matching the upstream storage wrapper
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
/// Default delay between attempts
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Bounded fixed-delay retry policy
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY)
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        // At least one attempt always runs.
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// Run `op` until it succeeds or the attempt bound is exhausted
    ///
    /// The error from the final attempt is returned unchanged.
    pub fn run<T, F>(&self, mut op: F) -> Result<T>
    where
        F: FnMut() -> Result<T>,
    {
        let mut attempt = 1;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if attempt < self.max_attempts => {
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        error = %err,
                        "operation failed, retrying"
                    );
                    thread::sleep(self.delay);
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    fn immediate(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::ZERO)
    }

    #[test]
    fn test_success_on_first_attempt_does_not_retry() {
        let calls = Cell::new(0);
        let result: Result<u32> = immediate(10).run(|| {
            calls.set(calls.get() + 1);
            Ok(7)
        });
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_recovers_after_transient_failures() {
        let calls = Cell::new(0);
        let result: Result<&str> = immediate(5).run(|| {
            calls.set(calls.get() + 1);
            if calls.get() < 3 {
                Err(anyhow!("connection reset"))
            } else {
                Ok("done")
            }
        });
        assert_eq!(result.unwrap(), "done");
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_exhaustion_returns_last_error() {
        let calls = Cell::new(0);
        let result: Result<()> = immediate(4).run(|| {
            calls.set(calls.get() + 1);
            Err(anyhow!("still down"))
        });
        assert_eq!(result.unwrap_err().to_string(), "still down");
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_zero_attempts_still_runs_once() {
        let calls = Cell::new(0);
        let result: Result<()> = immediate(0).run(|| {
            calls.set(calls.get() + 1);
            Err(anyhow!("boom"))
        });
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}

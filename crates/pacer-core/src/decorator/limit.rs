use tracing::trace;

use crate::backoff::{Backoff, STOP};

/// Caps the number of attempts that get a delay.
///
/// Attempts `0..limit` delegate to the base; any later attempt returns [`STOP`]
/// without consulting the base, so no jitter draw or computation happens once
/// retries are exhausted.
#[derive(Debug)]
pub struct LimitBackoff {
    base: Box<dyn Backoff>,
    limit: u64,
}

impl LimitBackoff {
    pub fn new(base: Box<dyn Backoff>, limit: u64) -> Self {
        Self { base, limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Backoff for LimitBackoff {
    fn next_delay_millis(&self, attempt: u32) -> i64 {
        if u64::from(attempt) >= self.limit {
            trace!(attempt, limit = self.limit, "retry limit reached");
            return STOP;
        }
        self.base.next_delay_millis(attempt)
    }
}

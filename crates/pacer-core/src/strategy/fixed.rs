use pacer_model::DEFAULT_DELAY_MILLIS;

use crate::backoff::{Backoff, saturate};

/// Constant delay, independent of the attempt number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedBackoff {
    delay_millis: u64,
}

impl FixedBackoff {
    pub const fn new(delay_millis: u64) -> Self {
        Self { delay_millis }
    }

    pub const fn delay_millis(&self) -> u64 {
        self.delay_millis
    }
}

impl Default for FixedBackoff {
    /// Returns a backoff with `delay = DEFAULT_DELAY_MILLIS`.
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MILLIS)
    }
}

impl Backoff for FixedBackoff {
    fn next_delay_millis(&self, _attempt: u32) -> i64 {
        saturate(self.delay_millis)
    }
}

use rand::Rng;

use pacer_model::{DEFAULT_MAX_DELAY_MILLIS, DEFAULT_MIN_DELAY_MILLIS};

use crate::backoff::{Backoff, saturate};

/// Uniformly random delay in `[min, max]`, independent of the attempt number.
///
/// `min <= max` is not enforced: when the bounds are swapped the draw uses `[max, min]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomBackoff {
    min_delay_millis: u64,
    max_delay_millis: u64,
}

impl RandomBackoff {
    pub const fn new(min_delay_millis: u64, max_delay_millis: u64) -> Self {
        Self {
            min_delay_millis,
            max_delay_millis,
        }
    }

    pub const fn min_delay_millis(&self) -> u64 {
        self.min_delay_millis
    }

    pub const fn max_delay_millis(&self) -> u64 {
        self.max_delay_millis
    }
}

impl Default for RandomBackoff {
    /// Returns a backoff over `[DEFAULT_MIN_DELAY_MILLIS, DEFAULT_MAX_DELAY_MILLIS]`.
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY_MILLIS, DEFAULT_MAX_DELAY_MILLIS)
    }
}

impl Backoff for RandomBackoff {
    fn next_delay_millis(&self, _attempt: u32) -> i64 {
        let lo = self.min_delay_millis.min(self.max_delay_millis);
        let hi = self.min_delay_millis.max(self.max_delay_millis);
        saturate(rand::rng().random_range(lo..=hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_bounds() {
        let backoff = RandomBackoff::new(12, 1234);
        for attempt in 0..1_000 {
            let delay = backoff.next_delay_millis(attempt);
            assert!(
                (12..=1234).contains(&delay),
                "attempt {attempt}: delay {delay} out of [12, 1234]"
            );
        }
    }

    #[test]
    fn equal_bounds_return_that_value() {
        let backoff = RandomBackoff::new(50, 50);
        for attempt in 0..20 {
            assert_eq!(backoff.next_delay_millis(attempt), 50);
        }
    }

    #[test]
    fn swapped_bounds_do_not_panic() {
        let backoff = RandomBackoff::new(300, 100);
        for attempt in 0..200 {
            let delay = backoff.next_delay_millis(attempt);
            assert!((100..=300).contains(&delay));
        }
    }

    #[test]
    fn ignores_attempt_number() {
        let backoff = RandomBackoff::new(0, 10);
        assert!((0..=10).contains(&backoff.next_delay_millis(u32::MAX)));
    }
}

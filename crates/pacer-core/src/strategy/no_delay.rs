use crate::backoff::Backoff;

/// Retries immediately: every attempt gets a zero delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoDelayBackoff;

/// Shared instance of [`NoDelayBackoff`].
pub static NO_DELAY: NoDelayBackoff = NoDelayBackoff;

impl Backoff for NoDelayBackoff {
    fn next_delay_millis(&self, _attempt: u32) -> i64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_zero() {
        for attempt in 0..100 {
            assert_eq!(NO_DELAY.next_delay_millis(attempt), 0);
        }
        assert_eq!(NO_DELAY.next_delay_millis(u32::MAX), 0);
    }
}

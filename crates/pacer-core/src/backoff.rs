use std::{fmt, sync::Arc, time::Duration};

/// Sentinel returned by [`Backoff::next_delay_millis`] when no further retry should happen.
///
/// It is **not** a delay. Callers that sleep on the raw value must check for it first,
/// or use [`Backoff::next_delay`] which maps it to `None`.
pub const STOP: i64 = -1;

/// Computes the delay before a retry attempt.
///
/// Implementations are pure functions of `attempt` (plus an RNG draw for the
/// randomized ones) and hold no retry history, so a single instance can be
/// shared across threads and retry loops.
pub trait Backoff: Send + Sync + fmt::Debug {
    /// Delay in milliseconds before attempt `attempt` (0-indexed), or [`STOP`].
    fn next_delay_millis(&self, attempt: u32) -> i64;

    /// Same as [`Backoff::next_delay_millis`], with [`STOP`] mapped to `None`.
    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        u64::try_from(self.next_delay_millis(attempt))
            .ok()
            .map(Duration::from_millis)
    }
}

impl<B: Backoff + ?Sized> Backoff for &B {
    fn next_delay_millis(&self, attempt: u32) -> i64 {
        (**self).next_delay_millis(attempt)
    }
}

impl<B: Backoff + ?Sized> Backoff for Box<B> {
    fn next_delay_millis(&self, attempt: u32) -> i64 {
        (**self).next_delay_millis(attempt)
    }
}

impl<B: Backoff + ?Sized> Backoff for Arc<B> {
    fn next_delay_millis(&self, attempt: u32) -> i64 {
        (**self).next_delay_millis(attempt)
    }
}

/// Converts an unsigned delay into the signed return type, saturating at `i64::MAX`.
pub(crate) fn saturate(ms: u64) -> i64 {
    i64::try_from(ms).unwrap_or(i64::MAX)
}

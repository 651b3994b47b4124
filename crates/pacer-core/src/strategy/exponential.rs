//! # Exponential backoff with a cap.
//!
//! The delay for attempt `n` is `initial × multiplier^n`, floored and clamped to `max`.
//! The base is derived from the attempt number alone, so a jitter decorator on top
//! never feeds back into later attempts.
//!
//! ```rust
//! use pacer_core::{Backoff, ExponentialBackoff};
//!
//! let backoff = ExponentialBackoff::new(100, 10_000, 2.0).unwrap();
//!
//! assert_eq!(backoff.next_delay_millis(0), 100);
//! assert_eq!(backoff.next_delay_millis(1), 200);
//! // 100 × 2^10 = 102_400 → capped
//! assert_eq!(backoff.next_delay_millis(10), 10_000);
//! ```

use pacer_model::{DEFAULT_DELAY_MILLIS, DEFAULT_MAX_DELAY_MILLIS, DEFAULT_MULTIPLIER};

use crate::{
    backoff::{Backoff, saturate},
    error::{BackoffError, BackoffResult},
};

/// Delay that grows geometrically with the attempt number, up to `max_delay_millis`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialBackoff {
    initial_delay_millis: u64,
    max_delay_millis: u64,
    multiplier: f64,
}

impl ExponentialBackoff {
    /// Creates an exponential backoff.
    ///
    /// # Errors
    /// [`BackoffError::InvalidMultiplier`] if `multiplier` is negative, NaN or infinite.
    ///
    /// # Notes
    /// - `multiplier < 1.0` makes delays shrink (not typical);
    /// - `multiplier == 1.0` keeps the delay at `initial` (up to `max`).
    pub fn new(
        initial_delay_millis: u64,
        max_delay_millis: u64,
        multiplier: f64,
    ) -> BackoffResult<Self> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(BackoffError::InvalidMultiplier(multiplier));
        }
        Ok(Self {
            initial_delay_millis,
            max_delay_millis,
            multiplier,
        })
    }

    pub const fn initial_delay_millis(&self) -> u64 {
        self.initial_delay_millis
    }

    pub const fn max_delay_millis(&self) -> u64 {
        self.max_delay_millis
    }

    pub const fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for ExponentialBackoff {
    /// Returns a backoff with:
    /// - `initial = DEFAULT_DELAY_MILLIS`;
    /// - `max = DEFAULT_MAX_DELAY_MILLIS`;
    /// - `multiplier = DEFAULT_MULTIPLIER`.
    fn default() -> Self {
        Self {
            initial_delay_millis: DEFAULT_DELAY_MILLIS,
            max_delay_millis: DEFAULT_MAX_DELAY_MILLIS,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl Backoff for ExponentialBackoff {
    fn next_delay_millis(&self, attempt: u32) -> i64 {
        if self.initial_delay_millis == 0 {
            return 0;
        }

        let clamped_exp = attempt.min(i32::MAX as u32) as i32;
        let unclamped = self.initial_delay_millis as f64 * self.multiplier.powi(clamped_exp);

        let ms = if !unclamped.is_finite() || unclamped >= self.max_delay_millis as f64 {
            self.max_delay_millis
        } else {
            unclamped.floor() as u64
        };
        saturate(ms)
    }
}

//! Decorators over any [`Backoff`](crate::Backoff).
//!
//! - [`JitterBackoff`] scales the delay by a random factor in `[1 - f, 1 + f]`;
//! - [`JitterBoundBackoff`] scales the delay by a random factor in `[lower, upper]`;
//! - [`LimitBackoff`] returns [`STOP`](crate::STOP) once `attempt >= limit`.
//!
//! Each one owns its base and implements `Backoff` itself, so they nest:
//! ```text
//! LimitBackoff ──► JitterBackoff ──► ExponentialBackoff
//! ```
//! Parameters are validated by [`BackoffBuilder`](crate::BackoffBuilder);
//! hand-built decorators are expected to pass sane values.

use rand::Rng;

mod jitter;
mod limit;

pub use jitter::{JitterBackoff, JitterBoundBackoff};
pub use limit::LimitBackoff;

/// Scales `delay` by a factor drawn uniformly from `[lo, hi]`, floored and clamped to `>= 0`.
///
/// [`STOP`](crate::STOP) and zero pass through without touching the RNG.
fn scale(delay: i64, lo: f64, hi: f64) -> i64 {
    if delay <= 0 {
        return delay;
    }

    let factor = if lo.is_finite() && hi.is_finite() && lo < hi {
        rand::rng().random_range(lo..=hi)
    } else {
        lo
    };
    (delay as f64 * factor).floor().max(0.0) as i64
}

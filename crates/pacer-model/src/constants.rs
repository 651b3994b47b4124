//! Default values used when a backoff spec leaves a field empty.
//!
//! The parser substitutes these per field, so `exponential=::3` means
//! "default initial delay, default cap, multiplier 3".

/// Delay used by `fixed=` and as the initial delay of `exponential=`.
pub const DEFAULT_DELAY_MILLIS: u64 = 200;

/// Lower bound of `random=` when the first field is empty.
pub const DEFAULT_MIN_DELAY_MILLIS: u64 = 0;

/// Cap of `exponential=` and upper bound of `random=`.
pub const DEFAULT_MAX_DELAY_MILLIS: u64 = 10_000;

/// Growth factor of `exponential=`.
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

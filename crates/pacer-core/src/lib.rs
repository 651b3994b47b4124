//! # pacer-core
//!
//! Retry delay computation: given a zero-based attempt index, a [`Backoff`]
//! answers how long to wait before the next attempt, or [`STOP`].
//!
//! ```text
//!  "exponential=100:5000:2" ──► parse_spec ──► BaseBackoff ─┐
//!                                     explicit Backoff ────┤
//!                                                          ▼
//!                      BackoffBuilder { jitter | jitter bound, limit }
//!                                                          │ build()
//!                                                          ▼
//!                      LimitBackoff(JitterBackoff(base))  : Box<dyn Backoff>
//! ```
//!
//! Nothing here sleeps or retries; the caller owns the retry loop.
//!
//! ```rust
//! use pacer_core::{Backoff, BackoffBuilder, STOP};
//!
//! let backoff = BackoffBuilder::new()
//!     .base_backoff_spec("fixed=250")
//!     .with_limit(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(backoff.next_delay_millis(0), 250);
//! assert_eq!(backoff.next_delay_millis(3), STOP);
//! ```
mod backoff;
pub use backoff::{Backoff, STOP};

pub mod error;
pub use error::{BackoffError, BackoffResult};

mod strategy;
pub use strategy::{ExponentialBackoff, FixedBackoff, NO_DELAY, NoDelayBackoff, RandomBackoff};

mod decorator;
pub use decorator::{JitterBackoff, JitterBoundBackoff, LimitBackoff};

mod spec;
pub use spec::{BaseBackoff, parse_spec};

mod builder;
pub use builder::BackoffBuilder;

pub mod map;

pub use pacer_model::{
    BackoffConfig, BackoffKind, DEFAULT_DELAY_MILLIS, DEFAULT_MAX_DELAY_MILLIS,
    DEFAULT_MIN_DELAY_MILLIS, DEFAULT_MULTIPLIER,
};

pub mod prelude {
    pub use crate::backoff::{Backoff, STOP};
    pub use crate::builder::BackoffBuilder;
    pub use crate::error::BackoffError;
    pub use crate::map::to_backoff;
}

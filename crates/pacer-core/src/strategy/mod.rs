//! Base delay strategies.
//!
//! - [`FixedBackoff`] the same delay for every attempt;
//! - [`ExponentialBackoff`] `initial × multiplier^attempt`, capped at `max`;
//! - [`RandomBackoff`] uniform delay in `[min, max]`;
//! - [`NoDelayBackoff`] always `0` (shared as [`NO_DELAY`]).
//!
//! None of them ever returns [`crate::STOP`]; wrap them in a
//! [`crate::LimitBackoff`] to bound the number of attempts.

mod exponential;
mod fixed;
mod no_delay;
mod random;

pub use exponential::ExponentialBackoff;
pub use fixed::FixedBackoff;
pub use no_delay::{NO_DELAY, NoDelayBackoff};
pub use random::RandomBackoff;

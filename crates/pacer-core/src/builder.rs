//! # Backoff builder.
//!
//! [`BackoffBuilder`] picks a base strategy, applies at most one jitter decorator and an
//! optional attempt limit, validates the combination and returns one composed
//! [`Backoff`].
//!
//! Validation order (the first violated rule is reported):
//! 1. exactly one base source (explicit backoff or spec string), and a spec string must parse;
//! 2. jitter factor and jitter bound are mutually exclusive;
//! 3. jitter factor in `(0, 1]`;
//! 4. jitter bound within `[0, 1]` with `lower <= upper`;
//! 5. limit `>= 0`.
//!
//! The limit always wraps outermost, so exhausted attempts short-circuit before any
//! jitter draw:
//! ```text
//! LimitBackoff(JitterBackoff | JitterBoundBackoff(base))
//! ```
//!
//! # Example
//! ```rust
//! use pacer_core::{Backoff, BackoffBuilder, NO_DELAY, STOP};
//!
//! let backoff = BackoffBuilder::new()
//!     .base_backoff_spec("exponential=100:5000:2")
//!     .with_jitter(0.2)
//!     .with_limit(5)
//!     .build()
//!     .unwrap();
//! assert_eq!(backoff.next_delay_millis(5), STOP);
//!
//! let err = BackoffBuilder::new()
//!     .base_backoff(&NO_DELAY)
//!     .with_jitter_bound(0.9, 1.2)
//!     .build()
//!     .unwrap_err();
//! assert!(err.to_string().contains("jitter bound"));
//! ```

use tracing::debug;

use crate::{
    backoff::Backoff,
    decorator::{JitterBackoff, JitterBoundBackoff, LimitBackoff},
    error::{BackoffError, BackoffResult},
    spec::parse_spec,
};

/// Single-use, chainable configuration for a composed [`Backoff`].
#[derive(Debug, Default)]
pub struct BackoffBuilder {
    base: Option<Box<dyn Backoff>>,
    spec: Option<String>,
    jitter: Option<f64>,
    jitter_bound: Option<(f64, f64)>,
    limit: Option<i64>,
}

impl BackoffBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the strategy described by a spec string (see [`parse_spec`]) as the base.
    pub fn base_backoff_spec(mut self, spec: impl Into<String>) -> Self {
        self.spec = Some(spec.into());
        self
    }

    /// Use an existing backoff as the base.
    ///
    /// Accepts shared instances too, e.g. `&NO_DELAY` or an `Arc<dyn Backoff>`.
    pub fn base_backoff(mut self, base: impl Backoff + 'static) -> Self {
        self.base = Some(Box::new(base));
        self
    }

    /// Symmetric jitter: `delay × random[1 - factor, 1 + factor]`, `factor` in `(0, 1]`.
    pub fn with_jitter(mut self, factor: f64) -> Self {
        self.jitter = Some(factor);
        self
    }

    /// Bounded jitter: `delay × random[lower, upper]`, both in `[0, 1]`.
    pub fn with_jitter_bound(mut self, lower: f64, upper: f64) -> Self {
        self.jitter_bound = Some((lower, upper));
        self
    }

    /// Give up after `limit` attempts: attempts `>= limit` return [`crate::STOP`].
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validates the configuration and composes the backoff.
    ///
    /// # Errors
    /// - [`BackoffError::NoBase`] / [`BackoffError::ConflictingBase`] when not exactly one
    ///   base source is set, or any parser error of the base spec;
    /// - [`BackoffError::ConflictingJitter`] when both jitter forms are set;
    /// - [`BackoffError::JitterFactorOutOfRange`], [`BackoffError::JitterBoundOutOfRange`],
    ///   [`BackoffError::NegativeLimit`] for out-of-range parameters.
    pub fn build(self) -> BackoffResult<Box<dyn Backoff>> {
        let Self {
            base,
            spec,
            jitter,
            jitter_bound,
            limit,
        } = self;

        let base: Box<dyn Backoff> = match (base, spec) {
            (Some(_), Some(_)) => return Err(BackoffError::ConflictingBase),
            (Some(base), None) => base,
            (None, Some(spec)) => Box::new(parse_spec(&spec)?),
            (None, None) => return Err(BackoffError::NoBase),
        };

        if jitter.is_some() && jitter_bound.is_some() {
            return Err(BackoffError::ConflictingJitter);
        }
        if let Some(factor) = jitter {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(BackoffError::JitterFactorOutOfRange(factor));
            }
        }
        if let Some((lower, upper)) = jitter_bound {
            let in_unit = |v: f64| (0.0..=1.0).contains(&v);
            if !(in_unit(lower) && in_unit(upper) && lower <= upper) {
                return Err(BackoffError::JitterBoundOutOfRange { lower, upper });
            }
        }
        let limit = match limit {
            Some(n) if n < 0 => return Err(BackoffError::NegativeLimit(n)),
            Some(n) => Some(n.unsigned_abs()),
            None => None,
        };

        let mut out = base;
        if let Some(factor) = jitter {
            out = Box::new(JitterBackoff::new(out, factor));
        }
        if let Some((lower, upper)) = jitter_bound {
            out = Box::new(JitterBoundBackoff::new(out, lower, upper));
        }
        if let Some(limit) = limit {
            out = Box::new(LimitBackoff::new(out, limit));
        }

        debug!(backoff = ?out, "backoff built");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{FixedBackoff, NO_DELAY, STOP};

    #[test]
    fn requires_a_base() {
        assert_eq!(BackoffBuilder::new().build().unwrap_err(), BackoffError::NoBase);
    }

    #[test]
    fn base_sources_are_mutually_exclusive() {
        let err = BackoffBuilder::new()
            .base_backoff(FixedBackoff::new(1))
            .base_backoff_spec("fixed=1")
            .build()
            .unwrap_err();
        assert_eq!(err, BackoffError::ConflictingBase);
    }

    #[test]
    fn builds_from_spec() {
        let backoff = BackoffBuilder::new()
            .base_backoff_spec("fixed=456")
            .build()
            .unwrap();
        for attempt in 0..10_000 {
            assert_eq!(backoff.next_delay_millis(attempt), 456);
        }
    }

    #[test]
    fn spec_errors_propagate() {
        let err = BackoffBuilder::new()
            .base_backoff_spec("fixe=456")
            .build()
            .unwrap_err();
        assert!(matches!(err, BackoffError::UnknownKind(_)));

        let err = BackoffBuilder::new()
            .base_backoff_spec("random=1")
            .build()
            .unwrap_err();
        assert!(err.is_invalid_spec_format());
    }

    #[test]
    fn builds_from_shared_instance() {
        let backoff = BackoffBuilder::new().base_backoff(&NO_DELAY).build().unwrap();
        assert_eq!(backoff.next_delay_millis(0), 0);

        let shared: Arc<dyn Backoff> = Arc::new(FixedBackoff::new(9));
        let a = BackoffBuilder::new().base_backoff(shared.clone()).build().unwrap();
        let b = BackoffBuilder::new().base_backoff(shared).build().unwrap();
        assert_eq!(a.next_delay_millis(1), b.next_delay_millis(1));
    }

    #[test]
    fn jitter_on_no_delay() {
        let backoff = BackoffBuilder::new()
            .base_backoff(&NO_DELAY)
            .with_jitter(0.9)
            .build()
            .unwrap();
        assert_eq!(backoff.next_delay_millis(3), 0);
    }

    #[test]
    fn jitter_forms_are_mutually_exclusive() {
        let err = BackoffBuilder::new()
            .base_backoff(&NO_DELAY)
            .with_jitter(0.9)
            .with_jitter_bound(0.1, 0.2)
            .build()
            .unwrap_err();
        assert_eq!(err, BackoffError::ConflictingJitter);

        let err = BackoffBuilder::new()
            .base_backoff(FixedBackoff::new(123))
            .with_limit(5)
            .with_jitter(0.9)
            .with_jitter_bound(0.9, 1.2)
            .build()
            .unwrap_err();
        assert_eq!(err, BackoffError::ConflictingJitter);
    }

    #[test]
    fn missing_base_is_reported_first() {
        let err = BackoffBuilder::new()
            .with_jitter(0.9)
            .with_jitter_bound(0.9, 1.2)
            .with_limit(-1)
            .build()
            .unwrap_err();
        assert_eq!(err, BackoffError::NoBase);
    }

    #[test]
    fn rejects_jitter_factor_out_of_range() {
        for factor in [0.0, -0.1, 1.01, f64::NAN] {
            let err = BackoffBuilder::new()
                .base_backoff(&NO_DELAY)
                .with_jitter(factor)
                .build()
                .unwrap_err();
            assert!(
                matches!(err, BackoffError::JitterFactorOutOfRange(_)),
                "factor {factor}: got {err:?}"
            );
        }

        assert!(
            BackoffBuilder::new()
                .base_backoff(&NO_DELAY)
                .with_jitter(1.0)
                .build()
                .is_ok()
        );
    }

    #[test]
    fn rejects_jitter_bound_out_of_range() {
        for (lower, upper) in [(0.9, 1.2), (-0.1, 0.5), (0.8, 0.2), (f64::NAN, 1.0)] {
            let err = BackoffBuilder::new()
                .base_backoff(&NO_DELAY)
                .with_jitter_bound(lower, upper)
                .build()
                .unwrap_err();
            assert!(
                matches!(err, BackoffError::JitterBoundOutOfRange { .. }),
                "bound [{lower}, {upper}]: got {err:?}"
            );
        }

        for (lower, upper) in [(0.0, 1.0), (0.5, 0.5), (0.0, 0.0)] {
            assert!(
                BackoffBuilder::new()
                    .base_backoff(&NO_DELAY)
                    .with_jitter_bound(lower, upper)
                    .build()
                    .is_ok()
            );
        }
    }

    #[test]
    fn rejects_negative_limit() {
        let err = BackoffBuilder::new()
            .base_backoff(FixedBackoff::new(123))
            .with_limit(-1)
            .build()
            .unwrap_err();
        assert_eq!(err, BackoffError::NegativeLimit(-1));

        let err = BackoffBuilder::new()
            .base_backoff(FixedBackoff::new(123))
            .with_limit(-1)
            .with_jitter(0.9)
            .with_jitter_bound(0.9, 1.2)
            .build()
            .unwrap_err();
        assert_eq!(err, BackoffError::ConflictingJitter);
    }

    #[test]
    fn limit_splits_attempts() {
        let backoff = BackoffBuilder::new()
            .base_backoff(FixedBackoff::new(123))
            .with_limit(5)
            .build()
            .unwrap();

        for attempt in 0..100 {
            let expected = if attempt < 5 { 123 } else { STOP };
            assert_eq!(backoff.next_delay_millis(attempt), expected, "attempt {attempt}");
        }
    }

    #[test]
    fn limit_wraps_jitter() {
        let backoff = BackoffBuilder::new()
            .base_backoff_spec("fixed=1000")
            .with_jitter_bound(0.5, 1.0)
            .with_limit(3)
            .build()
            .unwrap();

        for attempt in 0..3 {
            let delay = backoff.next_delay_millis(attempt);
            assert!((500..=1000).contains(&delay), "attempt {attempt}: {delay}");
        }
        assert_eq!(backoff.next_delay_millis(3), STOP);
        assert!(format!("{backoff:?}").starts_with("LimitBackoff"));
    }

    #[test]
    fn built_backoff_is_shareable_across_threads() {
        let backoff: Arc<dyn Backoff> = Arc::from(
            BackoffBuilder::new()
                .base_backoff_spec("random=10:20")
                .with_jitter(0.5)
                .with_limit(50)
                .build()
                .unwrap(),
        );

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let backoff = Arc::clone(&backoff);
                std::thread::spawn(move || {
                    (0..60)
                        .map(|attempt| backoff.next_delay_millis(attempt))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let delays = handle.join().unwrap();
            assert!(delays[..50].iter().all(|d| (5..=30).contains(d)));
            assert!(delays[50..].iter().all(|&d| d == STOP));
        }
    }

    #[test]
    fn limit_beyond_attempt_range_is_kept_exact() {
        let backoff = BackoffBuilder::new()
            .base_backoff(FixedBackoff::new(1))
            .with_limit(i64::from(u32::MAX) + 1)
            .build()
            .unwrap();
        assert_eq!(backoff.next_delay_millis(u32::MAX), 1);

        let backoff = BackoffBuilder::new()
            .base_backoff(FixedBackoff::new(1))
            .with_limit(i64::from(u32::MAX))
            .build()
            .unwrap();
        assert_eq!(backoff.next_delay_millis(u32::MAX - 1), 1);
        assert_eq!(backoff.next_delay_millis(u32::MAX), STOP);
    }
}

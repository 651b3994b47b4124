use crate::backoff::Backoff;

use super::scale;

/// Symmetric jitter: `delay × random[1 - factor, 1 + factor]`.
///
/// The expected delay equals the nominal one; `factor` must be in `(0, 1]`.
#[derive(Debug)]
pub struct JitterBackoff {
    base: Box<dyn Backoff>,
    factor: f64,
}

impl JitterBackoff {
    pub fn new(base: Box<dyn Backoff>, factor: f64) -> Self {
        Self { base, factor }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Backoff for JitterBackoff {
    fn next_delay_millis(&self, attempt: u32) -> i64 {
        let delay = self.base.next_delay_millis(attempt);
        scale(delay, 1.0 - self.factor, 1.0 + self.factor)
    }
}

/// Bounded jitter: `delay × random[lower, upper]`.
///
/// Both bounds lie in `[0, 1]`, so this only shrinks or preserves the nominal delay
/// ("between 50% and 100% of the computed delay").
#[derive(Debug)]
pub struct JitterBoundBackoff {
    base: Box<dyn Backoff>,
    lower_bound: f64,
    upper_bound: f64,
}

impl JitterBoundBackoff {
    pub fn new(base: Box<dyn Backoff>, lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            base,
            lower_bound,
            upper_bound,
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }
}

impl Backoff for JitterBoundBackoff {
    fn next_delay_millis(&self, attempt: u32) -> i64 {
        let delay = self.base.next_delay_millis(attempt);
        scale(delay, self.lower_bound, self.upper_bound)
    }
}

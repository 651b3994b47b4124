//! # Backoff spec strings.
//!
//! A base backoff can be written as a single `<kind>=<params>` string, e.g. from a
//! flag or a config file:
//!
//! | kind          | params                          | example                  |
//! |---------------|---------------------------------|--------------------------|
//! | `fixed`       | `<delay>`                       | `fixed=500`              |
//! | `exponential` | `<initial>:<max>:<multiplier>`  | `exponential=100:5000:2` |
//! | `random`      | `<min>:<max>`                   | `random=100:1000`        |
//!
//! Every field may be left empty to take its default ([`DEFAULT_DELAY_MILLIS`],
//! [`DEFAULT_MAX_DELAY_MILLIS`], [`DEFAULT_MULTIPLIER`], [`DEFAULT_MIN_DELAY_MILLIS`]),
//! but the colons must be present: `exponential=::` is valid, `exponential=` is not.
//!
//! Errors are reported in three distinct shapes:
//! - [`BackoffError::UnknownKind`] for an unrecognized `<kind>`;
//! - [`BackoffError::InvalidSpecFormat`] for a wrong number of fields;
//! - [`BackoffError::InvalidValue`] for a field that is present but not a non-negative integer.

use std::{fmt, str::FromStr};

use pacer_model::{
    BackoffKind, DEFAULT_DELAY_MILLIS, DEFAULT_MAX_DELAY_MILLIS, DEFAULT_MIN_DELAY_MILLIS,
    DEFAULT_MULTIPLIER,
};

use crate::{
    backoff::Backoff,
    error::{BackoffError, BackoffResult},
    strategy::{ExponentialBackoff, FixedBackoff, RandomBackoff},
};

/// One of the base strategies a spec string can describe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BaseBackoff {
    Fixed(FixedBackoff),
    Exponential(ExponentialBackoff),
    Random(RandomBackoff),
}

impl BaseBackoff {
    pub fn kind(&self) -> BackoffKind {
        match self {
            BaseBackoff::Fixed(_) => BackoffKind::Fixed,
            BaseBackoff::Exponential(_) => BackoffKind::Exponential,
            BaseBackoff::Random(_) => BackoffKind::Random,
        }
    }
}

impl Backoff for BaseBackoff {
    fn next_delay_millis(&self, attempt: u32) -> i64 {
        match self {
            BaseBackoff::Fixed(b) => b.next_delay_millis(attempt),
            BaseBackoff::Exponential(b) => b.next_delay_millis(attempt),
            BaseBackoff::Random(b) => b.next_delay_millis(attempt),
        }
    }
}

impl FromStr for BaseBackoff {
    type Err = BackoffError;
    fn from_str(s: &str) -> BackoffResult<Self> {
        parse_spec(s)
    }
}

/// Writes the canonical spec string.
///
/// Values produced by [`parse_spec`] always have an integral multiplier and parse back
/// to an equal value.
impl fmt::Display for BaseBackoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseBackoff::Fixed(b) => write!(f, "{}={}", self.kind(), b.delay_millis()),
            BaseBackoff::Exponential(b) => write!(
                f,
                "{}={}:{}:{}",
                self.kind(),
                b.initial_delay_millis(),
                b.max_delay_millis(),
                b.multiplier()
            ),
            BaseBackoff::Random(b) => write!(
                f,
                "{}={}:{}",
                self.kind(),
                b.min_delay_millis(),
                b.max_delay_millis()
            ),
        }
    }
}

impl From<FixedBackoff> for BaseBackoff {
    fn from(b: FixedBackoff) -> Self {
        BaseBackoff::Fixed(b)
    }
}

impl From<ExponentialBackoff> for BaseBackoff {
    fn from(b: ExponentialBackoff) -> Self {
        BaseBackoff::Exponential(b)
    }
}

impl From<RandomBackoff> for BaseBackoff {
    fn from(b: RandomBackoff) -> Self {
        BaseBackoff::Random(b)
    }
}

/// Parses a `<kind>=<params>` spec into a fully populated base strategy.
///
/// # Examples
/// ```rust
/// use pacer_core::{BaseBackoff, BackoffError, DEFAULT_DELAY_MILLIS, parse_spec};
///
/// let BaseBackoff::Exponential(b) = parse_spec("exponential=:201:3").unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(b.initial_delay_millis(), DEFAULT_DELAY_MILLIS);
/// assert_eq!(b.max_delay_millis(), 201);
///
/// assert!(parse_spec("exponential=1:2").unwrap_err().is_invalid_spec_format());
/// assert!(matches!(parse_spec("fixe=1"), Err(BackoffError::UnknownKind(_))));
/// ```
pub fn parse_spec(spec: &str) -> BackoffResult<BaseBackoff> {
    let spec = spec.trim();
    let (kind, params) = spec.split_once('=').unwrap_or((spec, ""));

    let kind: BackoffKind = kind
        .parse()
        .map_err(|_| BackoffError::UnknownKind(kind.trim().to_string()))?;
    if params.contains('=') {
        return Err(BackoffError::InvalidSpecFormat(spec.to_string()));
    }

    let parsed = match kind {
        BackoffKind::Fixed => {
            let delay = millis_field("delay", params.trim(), DEFAULT_DELAY_MILLIS)?;
            BaseBackoff::Fixed(FixedBackoff::new(delay))
        }
        BackoffKind::Exponential => {
            let [initial, max, multiplier] = split_fields::<3>(spec, params)?;
            BaseBackoff::Exponential(ExponentialBackoff::new(
                millis_field("initial", initial, DEFAULT_DELAY_MILLIS)?,
                millis_field("max", max, DEFAULT_MAX_DELAY_MILLIS)?,
                multiplier_field(multiplier)?,
            )?)
        }
        BackoffKind::Random => {
            let [min, max] = split_fields::<2>(spec, params)?;
            BaseBackoff::Random(RandomBackoff::new(
                millis_field("min", min, DEFAULT_MIN_DELAY_MILLIS)?,
                millis_field("max", max, DEFAULT_MAX_DELAY_MILLIS)?,
            ))
        }
    };
    Ok(parsed)
}

/// Splits `params` into exactly `N` colon-separated, trimmed fields.
fn split_fields<'a, const N: usize>(spec: &str, params: &'a str) -> BackoffResult<[&'a str; N]> {
    let malformed = || BackoffError::InvalidSpecFormat(spec.to_string());

    let mut parts = params.split(':');
    let mut fields = [""; N];
    for field in fields.iter_mut() {
        *field = parts.next().ok_or_else(malformed)?.trim();
    }
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok(fields)
}

fn millis_field(field: &'static str, raw: &str, default: u64) -> BackoffResult<u64> {
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse().map_err(|_| BackoffError::InvalidValue {
        field,
        value: raw.to_string(),
    })
}

fn multiplier_field(raw: &str) -> BackoffResult<f64> {
    if raw.is_empty() {
        return Ok(DEFAULT_MULTIPLIER);
    }
    raw.parse::<u32>()
        .map(f64::from)
        .map_err(|_| BackoffError::InvalidValue {
            field: "multiplier",
            value: raw.to_string(),
        })
}

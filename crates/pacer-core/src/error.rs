use thiserror::Error;

/// Errors produced while parsing a backoff spec or building a backoff.
#[derive(Debug, Error, PartialEq)]
pub enum BackoffError {
    #[error("unknown backoff kind: {0}")]
    UnknownKind(String),

    #[error("invalid backoff spec format: {0}")]
    InvalidSpecFormat(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("multiplier must be a finite non-negative number, got {0}")]
    InvalidMultiplier(f64),

    #[error("no base backoff configured")]
    NoBase,

    #[error("base backoff and base backoff spec are mutually exclusive")]
    ConflictingBase,

    #[error("jitter and jitter bound are mutually exclusive")]
    ConflictingJitter,

    #[error("jitter factor must be in (0, 1], got {0}")]
    JitterFactorOutOfRange(f64),

    #[error("jitter bound must satisfy 0 <= lower <= upper <= 1, got [{lower}, {upper}]")]
    JitterBoundOutOfRange { lower: f64, upper: f64 },

    #[error("limit must be non-negative, got {0}")]
    NegativeLimit(i64),
}

impl BackoffError {
    /// Whether the spec string was structurally malformed (wrong number of fields).
    pub fn is_invalid_spec_format(&self) -> bool {
        matches!(self, BackoffError::InvalidSpecFormat(_))
    }
}

pub type BackoffResult<T> = Result<T, BackoffError>;

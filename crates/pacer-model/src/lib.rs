mod constants;
pub use constants::{
    DEFAULT_DELAY_MILLIS, DEFAULT_MAX_DELAY_MILLIS, DEFAULT_MIN_DELAY_MILLIS, DEFAULT_MULTIPLIER,
};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::BackoffKind;

mod config;
pub use config::BackoffConfig;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// Base delay strategy named by the `<kind>` part of a backoff spec.
///
/// Kinds:
/// - `Fixed`: the same delay for every attempt (`fixed=<delay>`).
/// - `Exponential`: delay grows by a multiplier and is capped (`exponential=<initial>:<max>:<multiplier>`).
/// - `Random`: uniformly random delay within a range (`random=<min>:<max>`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum BackoffKind {
    Fixed,
    Exponential,
    Random,
}

impl BackoffKind {
    /// Canonical lowercase name, as written in a spec string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BackoffKind::Fixed => "fixed",
            BackoffKind::Exponential => "exponential",
            BackoffKind::Random => "random",
        }
    }
}

impl FromStr for BackoffKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(BackoffKind::Fixed),
            "exponential" => Ok(BackoffKind::Exponential),
            "random" => Ok(BackoffKind::Random),
            other => Err(ModelError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for BackoffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use serde::{Deserialize, Serialize};

#[cfg(feature = "schema")]
use schemars::JsonSchema;

use crate::error::{ModelError, ModelResult};

/// Declarative backoff configuration, as read from a config file or request body.
///
/// `base` is a backoff spec string (`fixed=…`, `exponential=…`, `random=…`).
/// The optional fields map one-to-one onto the builder knobs; validation
/// (mutually exclusive jitter forms, ranges, negative limit) happens when the
/// config is built, not when it is deserialized.
///
/// ```rust
/// use pacer_model::BackoffConfig;
///
/// let cfg = BackoffConfig::from_json(r#"{"base": "exponential=100:5000:2", "jitter": 0.2, "limit": 5}"#).unwrap();
/// assert_eq!(cfg.base, "exponential=100:5000:2");
/// assert_eq!(cfg.limit, Some(5));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BackoffConfig {
    /// Base strategy spec string.
    pub base: String,
    /// Symmetric jitter factor in `(0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,
    /// Jitter bounds `[lower, upper]`, both in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter_bound: Option<(f64, f64)>,
    /// Number of attempts that receive a delay; later attempts stop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl BackoffConfig {
    /// Config with only a base spec and no decorators.
    pub fn from_spec(spec: impl Into<String>) -> Self {
        Self {
            base: spec.into(),
            jitter: None,
            jitter_bound: None,
            limit: None,
        }
    }

    /// Parse a config from a JSON document.
    pub fn from_json(s: &str) -> ModelResult<Self> {
        serde_json::from_str(s).map_err(|e| ModelError::Invalid(e.to_string()))
    }

    /// Set the jitter factor.
    pub fn with_jitter(mut self, factor: f64) -> Self {
        self.jitter = Some(factor);
        self
    }

    /// Set the jitter bounds.
    pub fn with_jitter_bound(mut self, lower: f64, upper: f64) -> Self {
        self.jitter_bound = Some((lower, upper));
        self
    }

    /// Set the attempt limit.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_default_to_none() {
        let cfg = BackoffConfig::from_json(r#"{"base": "fixed=100"}"#).unwrap();

        assert_eq!(cfg, BackoffConfig::from_spec("fixed=100"));
        assert!(cfg.jitter.is_none());
        assert!(cfg.jitter_bound.is_none());
        assert!(cfg.limit.is_none());
    }

    #[test]
    fn jitter_bound_is_a_two_element_array() {
        let cfg =
            BackoffConfig::from_json(r#"{"base": "random=1:2", "jitterBound": [0.5, 0.8]}"#)
                .unwrap();
        assert_eq!(cfg.jitter_bound, Some((0.5, 0.8)));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = BackoffConfig::from_json(r#"{"base": "fixed=1", "retries": 3}"#).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn rejects_missing_base() {
        let err = BackoffConfig::from_json(r#"{"limit": 3}"#).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn serialization_skips_unset_fields() {
        let json = serde_json::to_string(&BackoffConfig::from_spec("fixed=")).unwrap();
        assert_eq!(json, r#"{"base":"fixed="}"#);
    }

    #[test]
    fn serde_roundtrip_with_all_fields() {
        let cfg = BackoffConfig::from_spec("exponential=1:2:3")
            .with_jitter(0.3)
            .with_jitter_bound(0.1, 0.9)
            .with_limit(-1);

        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"jitterBound\":[0.1,0.9]"));

        let back = BackoffConfig::from_json(&json).unwrap();
        assert_eq!(back, cfg);
    }
}

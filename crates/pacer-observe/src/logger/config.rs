use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::{
    error::LoggerResult,
    object::{LoggerFormat, LoggerLevel},
};

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g. `"info"`, `"pacer_core=trace,warn"`).
    pub level: LoggerLevel,
    /// Include module/target names.
    pub with_targets: bool,
    /// Colored text output (only honored when stderr is a terminal).
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Reads `<PREFIX>_LOG` (filter) and `<PREFIX>_LOG_FORMAT` from the environment.
    ///
    /// Unset or empty variables keep their defaults; set but invalid ones are an error.
    pub fn from_env(prefix: &str) -> LoggerResult<Self> {
        Self::from_lookup(prefix, |key| std::env::var(key).ok())
    }

    fn from_lookup(prefix: &str, lookup: impl Fn(&str) -> Option<String>) -> LoggerResult<Self> {
        let get = |suffix: &str| {
            lookup(&format!("{prefix}_{suffix}")).filter(|v| !v.trim().is_empty())
        };

        let mut cfg = Self::default();
        if let Some(level) = get("LOG") {
            cfg.level = level.parse()?;
        }
        if let Some(format) = get("LOG_FORMAT") {
            cfg.format = format.parse()?;
        }
        Ok(cfg)
    }

    /// Color is used only if enabled in config **and** stderr is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}

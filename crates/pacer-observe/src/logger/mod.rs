mod config;
mod error;
mod install;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Logs are written to stderr so that stdout stays free for program output.
/// Can be called once per process; a second call returns [`LoggerError::AlreadyInitialized`].
///
/// # Examples
/// ```rust
/// use pacer_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger is installed once");
///
/// tracing::info!("logger initialized");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => install::text(cfg),
        LoggerFormat::Json => install::json(cfg),
        LoggerFormat::Journald => install::journald(cfg),
    }
}

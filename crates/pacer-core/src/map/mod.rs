mod config;

pub use config::{to_backoff, to_builder};

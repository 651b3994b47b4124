use std::{fs, path::Path};

use anyhow::Context;
use pacer_core::BackoffConfig;

/// Resolves a command-line policy argument.
///
/// `@path` loads a JSON [`BackoffConfig`] from `path`; anything else is a bare spec string.
pub fn load(arg: &str) -> anyhow::Result<BackoffConfig> {
    match arg.strip_prefix('@') {
        Some(path) => from_file(Path::new(path)),
        None => Ok(BackoffConfig::from_spec(arg)),
    }
}

fn from_file(path: &Path) -> anyhow::Result<BackoffConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read backoff config {}", path.display()))?;
    BackoffConfig::from_json(&raw)
        .with_context(|| format!("failed to parse backoff config {}", path.display()))
}

use std::io::{self, Write};

use anyhow::{Context, bail};
use tracing::info;

use pacer_core::map::to_backoff;
use pacer_observe::{LoggerConfig, init_logger};

mod policy;
mod schedule;

const USAGE: &str = "usage: pacer <SPEC|@config.json> [ATTEMPTS]";
const DEFAULT_ATTEMPTS: u32 = 10;

fn main() -> anyhow::Result<()> {
    // 1) logger
    let cfg = LoggerConfig::from_env("PACER")?;
    init_logger(&cfg)?;

    // 2) arguments
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        bail!(USAGE);
    };
    let attempts = match args.next() {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("invalid attempt count: {raw}"))?,
        None => DEFAULT_ATTEMPTS,
    };

    // 3) policy
    let config = policy::load(&arg)?;
    let backoff = to_backoff(&config).with_context(|| format!("invalid backoff policy: {arg}"))?;
    info!(base = %config.base, attempts, "evaluating backoff");

    // 4) schedule
    let mut out = io::stdout().lock();
    for step in schedule::schedule(backoff.as_ref(), attempts) {
        writeln!(out, "{step}")?;
    }
    Ok(())
}

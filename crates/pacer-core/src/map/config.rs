use pacer_model::BackoffConfig;

use crate::{backoff::Backoff, builder::BackoffBuilder, error::BackoffResult};

pub fn to_builder(cfg: &BackoffConfig) -> BackoffBuilder {
    let mut builder = BackoffBuilder::new().base_backoff_spec(cfg.base.as_str());
    if let Some(factor) = cfg.jitter {
        builder = builder.with_jitter(factor);
    }
    if let Some((lower, upper)) = cfg.jitter_bound {
        builder = builder.with_jitter_bound(lower, upper);
    }
    if let Some(limit) = cfg.limit {
        builder = builder.with_limit(limit);
    }
    builder
}

pub fn to_backoff(cfg: &BackoffConfig) -> BackoffResult<Box<dyn Backoff>> {
    to_builder(cfg).build()
}

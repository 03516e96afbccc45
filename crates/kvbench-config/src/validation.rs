// Configuration validation
//
// Validates that required fields are present and values are sensible

use crate::*;
use anyhow::{bail, Result};
use tracing::warn;

pub fn validate_config(config: &RuntimeConfig) -> Result<()> {
    validate_workload_config(&config.workload)?;
    validate_storage_config(&config.storage)?;
    validate_bench_config(&config.bench)?;

    Ok(())
}

fn validate_workload_config(config: &WorkloadConfig) -> Result<()> {
    if config.entity_count == 0 {
        bail!("workload.entity_count must be greater than 0");
    }

    if config.individual_count == 0 {
        bail!("workload.individual_count must be greater than 0");
    }

    if config.chunk_size == 0 {
        bail!("workload.chunk_size must be greater than 0");
    }

    // Clamped at run time rather than rejected
    if config.individual_count > config.entity_count {
        warn!(
            individual_count = config.individual_count,
            entity_count = config.entity_count,
            "workload.individual_count exceeds entity_count; only entity_count entities will be written"
        );
    }

    if config.entity_count > 1_000_000 {
        warn!(
            entity_count = config.entity_count,
            "workload.entity_count is very large; the whole workload is held in memory"
        );
    }

    Ok(())
}

fn validate_storage_config(config: &StorageConfig) -> Result<()> {
    match config.backend {
        StorageBackend::Memory => {}
        StorageBackend::Fs => {
            let fs = config
                .fs
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("fs storage backend requires 'fs' configuration"))?;

            if fs.path.is_empty() {
                bail!("storage.fs.path must not be empty");
            }
        }
        StorageBackend::Redis => {
            let redis = config.redis.as_ref().ok_or_else(|| {
                anyhow::anyhow!("redis storage backend requires 'redis' configuration")
            })?;

            if redis.endpoint.is_empty() {
                bail!("storage.redis.endpoint is required for redis backend");
            }

            if !redis.endpoint.contains("://") {
                bail!(
                    "storage.redis.endpoint must include a scheme (tcp://, rediss:// or unix://), got '{}'",
                    redis.endpoint
                );
            }

            if redis.db < 0 {
                bail!("storage.redis.db must not be negative");
            }
        }
    }

    Ok(())
}

fn validate_bench_config(config: &BenchConfig) -> Result<()> {
    if config.sample_iterations == 0 {
        bail!("bench.sample_iterations must be greater than 0");
    }

    if config.serializers.is_empty() {
        bail!("bench.serializers must list at least one serializer");
    }

    Ok(())
}

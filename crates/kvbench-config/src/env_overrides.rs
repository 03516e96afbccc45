use super::{FsConfig, LogFormat, RedisConfig, RuntimeConfig, StorageBackend};
use anyhow::{anyhow, Context, Result};
use kvbench_core::Serializer;
use std::str::FromStr;

pub const ENV_PREFIX: &str = "KVBENCH_";

/// Abstraction over environment-variable lookups so tests (and embedders)
/// can supply their own source of overrides.
pub trait EnvSource {
    /// Look up `key` without the `KVBENCH_` prefix.
    fn get(&self, key: &str) -> Option<String>;
}

/// Apply environment-variable overrides (highest priority) to the runtime config.
pub fn apply_env_overrides<E: EnvSource>(config: &mut RuntimeConfig, env: &E) -> Result<()> {
    // Workload
    if let Some(val) = get_env_parsed::<_, usize>(env, "ENTITY_COUNT")? {
        config.workload.entity_count = val;
    }
    if let Some(val) = get_env_parsed::<_, usize>(env, "INDIVIDUAL_COUNT")? {
        config.workload.individual_count = val;
    }
    if let Some(val) = get_env_parsed::<_, usize>(env, "CHUNK_SIZE")? {
        config.workload.chunk_size = val;
    }
    if let Some(val) = get_env_parsed::<_, u64>(env, "SEED")? {
        config.workload.seed = val;
    }

    // Storage backend
    if let Some(backend) = env.get("STORAGE_BACKEND") {
        config.storage.backend = backend
            .parse::<StorageBackend>()
            .context("Invalid KVBENCH_STORAGE_BACKEND value")?;
    }
    // Filesystem storage
    if let Some(path) = env.get("STORAGE_PATH") {
        config.storage.fs.get_or_insert_with(FsConfig::default).path = path;
    }

    // Redis storage
    if let Some(endpoint) = env.get("REDIS_ENDPOINT") {
        ensure_redis(config).endpoint = endpoint;
    }
    if let Some(db) = get_env_parsed::<_, i64>(env, "REDIS_DB")? {
        ensure_redis(config).db = db;
    }
    if let Some(username) = env.get("REDIS_USERNAME") {
        ensure_redis(config).username = Some(username);
    }
    if let Some(password) = env.get("REDIS_PASSWORD") {
        ensure_redis(config).password = Some(password);
    }

    // Logging
    if let Some(level) = env.get("LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(format) = env.get("LOG_FORMAT") {
        config.logging.format = match format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };
    }

    // Full statistical run
    if let Some(val) = get_env_parsed::<_, usize>(env, "WARMUP_ITERATIONS")? {
        config.bench.warmup_iterations = val;
    }
    if let Some(val) = get_env_parsed::<_, usize>(env, "SAMPLE_ITERATIONS")? {
        config.bench.sample_iterations = val;
    }
    if let Some(list) = env.get("SERIALIZERS") {
        config.bench.serializers = parse_serializers(&list)?;
    }

    Ok(())
}

fn ensure_redis(config: &mut RuntimeConfig) -> &mut RedisConfig {
    config.storage.redis.get_or_insert_with(RedisConfig::default)
}

fn get_env_parsed<E, T>(env: &E, key: &str) -> Result<Option<T>>
where
    E: EnvSource,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env.get(key) {
        Some(val) => {
            let parsed = val
                .trim()
                .parse::<T>()
                .map_err(|e| anyhow!("Failed to parse {}{}: {}", ENV_PREFIX, key, e))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

/// Comma separated serializer list, e.g. `json,protobuf`.
fn parse_serializers(list: &str) -> Result<Vec<Serializer>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Serializer>()
                .with_context(|| format!("Invalid {}SERIALIZERS entry", ENV_PREFIX))
        })
        .collect()
}

// kvbench-config - Runtime configuration for the benchmark harness
//
// Supports configuration from multiple sources:
// 1. Environment variables (highest priority, KVBENCH_ prefix)
// 2. Config file path from KVBENCH_CONFIG env var
// 3. Config file contents from KVBENCH_CONFIG_CONTENT env var
// 4. Default config file locations (./kvbench.toml, ./.kvbench.toml)
// 5. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use kvbench_core::{default_anchor, Serializer, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

mod env_overrides;
mod sources;
mod validation;

pub use env_overrides::{EnvSource, ENV_PREFIX};

/// Main runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub workload: WorkloadConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LogConfig,

    #[serde(default)]
    pub bench: BenchConfig,
}

/// Shape of the generated workload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Entities written by every batched strategy
    pub entity_count: usize,
    /// Entities written by the individual strategy (slow path, kept smaller)
    pub individual_count: usize,
    pub chunk_size: usize,
    pub seed: u64,
    /// Creation timestamps are drawn from the year before this instant
    pub anchor: DateTime<Utc>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            entity_count: 1000,
            individual_count: 100,
            chunk_size: 500,
            seed: DEFAULT_SEED,
            anchor: default_anchor(),
        }
    }
}

/// Key-value store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fs: Option<FsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis: Option<RedisConfig>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Redis,
            fs: None,
            redis: Some(RedisConfig::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Fs,
    Redis,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Fs => write!(f, "fs"),
            StorageBackend::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(StorageBackend::Memory),
            "fs" | "filesystem" => Ok(StorageBackend::Fs),
            "redis" => Ok(StorageBackend::Redis),
            _ => anyhow::bail!(
                "Unsupported storage backend: {}. Supported: memory, fs, redis",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FsConfig {
    pub path: String,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            path: "./data".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub endpoint: String,
    #[serde(default)]
    pub db: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            endpoint: "tcp://127.0.0.1:6379".to_string(),
            db: 0,
            username: None,
            password: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

/// Full statistical run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Unrecorded runs per (serializer, strategy) before sampling
    pub warmup_iterations: usize,
    pub sample_iterations: usize,
    pub serializers: Vec<Serializer>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: 1,
            sample_iterations: 10,
            serializers: Serializer::ALL.to_vec(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from all sources with priority
    pub fn load() -> Result<Self> {
        sources::load_config()
    }

    /// Load configuration starting from an explicit file (CLI --config flag).
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        sources::load_from_file_path(path)
    }

    /// Parse a TOML document; missing sections fall back to defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse kvbench config")
    }

    /// Apply environment overrides from a custom source.
    pub fn apply_env_overrides_from<E: EnvSource>(&mut self, env: &E) -> Result<()> {
        env_overrides::apply_env_overrides(self, env)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

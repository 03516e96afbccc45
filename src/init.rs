// Initialization utilities for the harness
//
// Store construction and logging/tracing setup

use std::sync::Arc;

use anyhow::{Context, Result};
use kvbench_config::{LogConfig, LogFormat, StorageConfig};
use kvbench_store::{KvStore, OpendalStore};
use tracing::info;

/// Build the shared store every strategy and serializer writes through.
pub fn init_store(config: &StorageConfig) -> Result<Arc<dyn KvStore>> {
    let store = OpendalStore::from_config(config)
        .with_context(|| format!("Failed to initialize {} store", config.backend))?;
    info!("Store ready: backend={}", store.name());
    Ok(Arc::new(store))
}

/// Initialize tracing subscriber based on log config
pub fn init_tracing(config: &LogConfig) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Parse log level from config
    let env_filter =
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // Try to set the global subscriber; ignore error if already set (idempotent)
    let _ = match config.format {
        LogFormat::Json => {
            tracing::subscriber::set_global_default(registry.with(fmt::layer().json()))
        }
        LogFormat::Text => tracing::subscriber::set_global_default(registry.with(fmt::layer())),
    };
}

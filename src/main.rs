use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kvbench::{compare, full, init_store, init_tracing, report};
use kvbench_config::{FsConfig, RedisConfig, RuntimeConfig, StorageBackend};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Compare serializers and write strategies against a key-value store
#[derive(Parser)]
#[command(name = "kvbench")]
#[command(version)]
#[command(about = "Compare serializers and write strategies against a key-value store", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Storage backend: memory, fs, redis (overrides config file)
    #[arg(short, long, value_name = "BACKEND", global = true)]
    backend: Option<String>,

    /// Number of entities written by the batched strategies
    #[arg(short = 'n', long, value_name = "N", global = true)]
    entities: Option<usize>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'v', long, value_name = "LEVEL", global = true)]
    log_level: Option<String>,

    /// Print results as JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Serialized size of one entity per serializer
    Sizes,
    /// One timed pass per serializer and strategy (default)
    Compare,
    /// Warmup plus repeated samples with summary statistics
    Full,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?
        .block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    // Step 1: Load base configuration
    let mut config = if let Some(config_path) = &cli.config {
        RuntimeConfig::load_from_path(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        RuntimeConfig::load().context("Failed to load configuration")?
    };

    // Step 2: Apply CLI overrides (highest priority) and re-check
    apply_cli_overrides(&mut config, &cli)?;
    config.validate()?;

    // Step 3: Initialize tracing
    init_tracing(&config.logging);

    let command = match cli.command {
        Some(command) => command,
        None => choose_interactively(),
    };

    display_startup_info(&config);

    match command {
        Commands::Sizes => run_sizes(&config, cli.json),
        Commands::Compare => run_compare(&config, cli.json).await,
        Commands::Full => run_full(&config, cli.json).await,
    }
}

fn apply_cli_overrides(config: &mut RuntimeConfig, cli: &Cli) -> Result<()> {
    if let Some(backend) = &cli.backend {
        config.storage.backend = backend.parse::<StorageBackend>()?;
        match config.storage.backend {
            StorageBackend::Fs => {
                config.storage.fs.get_or_insert_with(FsConfig::default);
            }
            StorageBackend::Redis => {
                config.storage.redis.get_or_insert_with(RedisConfig::default);
            }
            StorageBackend::Memory => {}
        }
    }

    if let Some(entities) = cli.entities {
        config.workload.entity_count = entities;
    }

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    Ok(())
}

/// Menu shown when no subcommand is given; falls back to the quick
/// comparison when there is no terminal to prompt on.
fn choose_interactively() -> Commands {
    let options = &[
        "Quick comparison (fast)",
        "Full statistical run (slow but detailed)",
    ];
    let selection = dialoguer::Select::new()
        .with_prompt("Choose benchmark mode")
        .items(options)
        .default(0)
        .interact();

    match selection {
        Ok(1) => Commands::Full,
        Ok(_) => Commands::Compare,
        Err(e) => {
            warn!("Interactive prompt unavailable ({}); running quick comparison", e);
            Commands::Compare
        }
    }
}

fn display_startup_info(config: &RuntimeConfig) {
    info!("╭─────────────────────────────────────────────────");
    info!("│ kvbench v{}", env!("CARGO_PKG_VERSION"));
    info!("├─────────────────────────────────────────────────");
    info!("│ Storage backend: {}", config.storage.backend);

    match config.storage.backend {
        StorageBackend::Fs => {
            if let Some(fs) = &config.storage.fs {
                info!("│ Data directory: {}", fs.path);
            }
        }
        StorageBackend::Redis => {
            if let Some(redis) = &config.storage.redis {
                info!("│ Redis endpoint: {} (db {})", redis.endpoint, redis.db);
            }
        }
        StorageBackend::Memory => {}
    }

    info!("│ Entities: {}", config.workload.entity_count);
    info!("│ Individual writes: {}", config.workload.individual_count);
    info!("│ Chunk size: {}", config.workload.chunk_size);
    info!("│ Seed: {}", config.workload.seed);
    info!("╰─────────────────────────────────────────────────");
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to encode results as JSON")?;
    println!("{out}");
    Ok(())
}

fn run_sizes(config: &RuntimeConfig, json: bool) -> Result<()> {
    let entities = compare::generate_workload(&config.workload);
    let first = entities
        .first()
        .context("Workload is empty; entity_count must be at least 1")?;
    let sizes = compare::size_report(first, &config.bench.serializers)?;

    if json {
        print_json(&sizes)
    } else {
        print!("{}", report::render_sizes(&sizes));
        Ok(())
    }
}

async fn run_compare(config: &RuntimeConfig, json: bool) -> Result<()> {
    let store = init_store(&config.storage)?;
    let quick = compare::run_quick(store, &config.workload, &config.bench.serializers).await?;

    if json {
        print_json(&quick)
    } else {
        print!("{}", report::render_quick(&quick));
        Ok(())
    }
}

async fn run_full(config: &RuntimeConfig, json: bool) -> Result<()> {
    let store = init_store(&config.storage)?;
    let results = full::run_full(store, &config.workload, &config.bench).await?;

    if json {
        print_json(&results)
    } else {
        print!("{}", report::render_full(&results));
        Ok(())
    }
}

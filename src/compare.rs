// Quick comparison: one timed pass per serializer and strategy
//
// Individual writes cover only the first `individual_count` entities; the
// batched strategies write the whole workload.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use kvbench_config::WorkloadConfig;
use kvbench_core::{Entity, EntityGenerator, Serializer};
use kvbench_store::KvStore;
use kvbench_writer::{EntityWriter, WriteStrategy};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Written and read back once per serializer; no generated entity uses it.
const PROBE_ID: i32 = -1;

#[derive(Debug, Clone, Serialize)]
pub struct SizeEntry {
    pub serializer: &'static str,
    pub bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyTiming {
    pub strategy: &'static str,
    pub entities: usize,
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SerializerComparison {
    pub serializer: &'static str,
    pub timings: Vec<StrategyTiming>,
    /// A stored entity read back equal to what was written
    pub round_trip: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickReport {
    pub backend: &'static str,
    pub entity_count: usize,
    pub sizes: Vec<SizeEntry>,
    pub serializers: Vec<SerializerComparison>,
}

/// The strategies a run measures, paired with how many entities each writes.
pub fn workload_plan(workload: &WorkloadConfig) -> Vec<(WriteStrategy, usize)> {
    let individual = workload.individual_count.min(workload.entity_count);
    if individual < workload.individual_count {
        warn!(
            "individual_count {} exceeds entity_count {}; clamping",
            workload.individual_count, workload.entity_count
        );
    }

    vec![
        (WriteStrategy::Individual, individual),
        (WriteStrategy::BatchWithAwait, workload.entity_count),
        (WriteStrategy::FireAndForget, workload.entity_count),
        (
            WriteStrategy::Chunked {
                chunk_size: workload.chunk_size,
            },
            workload.entity_count,
        ),
    ]
}

pub fn generate_workload(workload: &WorkloadConfig) -> Vec<Entity> {
    EntityGenerator::new(workload.seed)
        .with_anchor(workload.anchor)
        .generate(workload.entity_count)
}

/// Serialized size of `entity` under each serializer.
pub fn size_report(entity: &Entity, serializers: &[Serializer]) -> Result<Vec<SizeEntry>> {
    serializers
        .iter()
        .map(|&serializer| {
            let bytes = serializer
                .serialize(entity)
                .with_context(|| format!("Failed to size entity with {}", serializer.name()))?;
            Ok(SizeEntry {
                serializer: serializer.name(),
                bytes: bytes.len(),
            })
        })
        .collect()
}

/// Write `entity` under a dedicated key and check it reads back unchanged.
pub async fn verify_round_trip(writer: &EntityWriter, entity: &Entity) -> Result<bool> {
    let mut probe = entity.clone();
    probe.id = PROBE_ID;

    writer.save_individual(std::slice::from_ref(&probe)).await?;
    let read = writer.get(PROBE_ID).await?;
    Ok(read.as_ref() == Some(&probe))
}

pub async fn run_quick(
    store: Arc<dyn KvStore>,
    workload: &WorkloadConfig,
    serializers: &[Serializer],
) -> Result<QuickReport> {
    let entities = generate_workload(workload);
    let first = entities
        .first()
        .context("Workload is empty; entity_count must be at least 1")?;

    let sizes = size_report(first, serializers)?;
    let plan = workload_plan(workload);

    info!(
        backend = store.name(),
        entities = entities.len(),
        "Running quick comparison"
    );

    let mut results = Vec::with_capacity(serializers.len());
    for &serializer in serializers {
        let writer = EntityWriter::new(store.clone(), serializer);

        let mut timings = Vec::with_capacity(plan.len());
        for &(strategy, count) in &plan {
            let slice = &entities[..count];
            let start = Instant::now();
            writer
                .save(strategy, slice)
                .await
                .with_context(|| format!("{} {} failed", serializer.name(), strategy))?;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            debug!(
                codec = serializer.name(),
                strategy = strategy.name(),
                elapsed_ms,
                "Strategy timed"
            );
            timings.push(StrategyTiming {
                strategy: strategy.name(),
                entities: count,
                elapsed_ms,
            });
        }

        let round_trip = verify_round_trip(&writer, first).await?;
        if !round_trip {
            warn!(codec = serializer.name(), "Round trip through the store did not match");
        }

        results.push(SerializerComparison {
            serializer: serializer.name(),
            timings,
            round_trip,
        });
    }

    Ok(QuickReport {
        backend: store.name(),
        entity_count: entities.len(),
        sizes,
        serializers: results,
    })
}

// Full statistical run
//
// For every serializer and strategy: a few unrecorded warmup passes, then
// timed samples summarised with mean, median, min, max and deviation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use kvbench_config::{BenchConfig, WorkloadConfig};
use kvbench_store::KvStore;
use kvbench_writer::EntityWriter;
use serde::Serialize;
use tracing::info;

use crate::compare::{generate_workload, workload_plan};
use crate::stats::Summary;

#[derive(Debug, Clone, Serialize)]
pub struct FullResult {
    pub serializer: &'static str,
    pub strategy: &'static str,
    pub entities: usize,
    pub summary: Summary,
}

pub async fn run_full(
    store: Arc<dyn KvStore>,
    workload: &WorkloadConfig,
    bench: &BenchConfig,
) -> Result<Vec<FullResult>> {
    let entities = generate_workload(workload);
    let plan = workload_plan(workload);

    info!(
        backend = store.name(),
        entities = entities.len(),
        warmup = bench.warmup_iterations,
        samples = bench.sample_iterations,
        "Running full benchmark"
    );

    let mut results = Vec::with_capacity(bench.serializers.len() * plan.len());
    for &serializer in &bench.serializers {
        let writer = EntityWriter::new(store.clone(), serializer);

        for &(strategy, count) in &plan {
            let slice = &entities[..count];

            for _ in 0..bench.warmup_iterations {
                writer.save(strategy, slice).await?;
            }

            let mut samples: Vec<Duration> = Vec::with_capacity(bench.sample_iterations);
            for _ in 0..bench.sample_iterations {
                let start = Instant::now();
                writer.save(strategy, slice).await?;
                samples.push(start.elapsed());
            }

            let summary = Summary::from_durations(&samples)
                .context("sample_iterations must be at least 1")?;
            info!(
                codec = serializer.name(),
                strategy = strategy.name(),
                mean_ms = summary.mean_ms,
                "Benchmark complete"
            );

            results.push(FullResult {
                serializer: serializer.name(),
                strategy: strategy.name(),
                entities: count,
                summary,
            });
        }
    }

    Ok(results)
}

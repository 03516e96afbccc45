// Shared workloads for the criterion benchmarks
//
// Entities come from the seeded generator so every run encodes identical data.

use kvbench_core::{Entity, EntityGenerator};

/// Workload size presets
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum WorkloadSize {
    Small,  // 100 entities
    Medium, // 1k entities, the default run size
    Large,  // 10k entities
}

impl WorkloadSize {
    pub fn entity_count(&self) -> usize {
        match self {
            WorkloadSize::Small => 100,
            WorkloadSize::Medium => 1_000,
            WorkloadSize::Large => 10_000,
        }
    }
}

pub fn generate_entities(size: WorkloadSize) -> Vec<Entity> {
    EntityGenerator::default().generate(size.entity_count())
}

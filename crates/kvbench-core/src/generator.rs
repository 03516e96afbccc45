//! Seeded synthetic workloads
//!
//! Benchmarks are only comparable when every run writes the same entities,
//! so generation uses ChaCha8 (fixed algorithm, portable output) and an
//! explicit anchor timestamp instead of the wall clock.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::entity::{Entity, NestedData};

pub const DEFAULT_SEED: u64 = 42;

/// 2025-01-01T00:00:00Z
const DEFAULT_ANCHOR_SECS: i64 = 1_735_689_600;

const NUMBERS_PER_ENTITY: usize = 10;

/// Timestamp creation dates count back from when no anchor is configured.
pub fn default_anchor() -> DateTime<Utc> {
    DateTime::from_timestamp(DEFAULT_ANCHOR_SECS, 0).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct EntityGenerator {
    seed: u64,
    anchor: DateTime<Utc>,
}

impl Default for EntityGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl EntityGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            anchor: default_anchor(),
        }
    }

    pub fn with_anchor(mut self, anchor: DateTime<Utc>) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate `count` entities with ids `0..count`.
    ///
    /// Output is a pure function of (seed, anchor, count).
    pub fn generate(&self, count: usize) -> Vec<Entity> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let entities: Vec<Entity> = (0_i32..)
            .take(count)
            .map(|id| self.entity(id, &mut rng))
            .collect();

        tracing::debug!(
            seed = self.seed,
            count = entities.len(),
            "Generated synthetic entities"
        );
        entities
    }

    // Draw order is part of the output contract; keep it stable.
    fn entity(&self, id: i32, rng: &mut ChaCha8Rng) -> Entity {
        let age_days = rng.gen_range(0..365);
        let field3 = rng.gen_range(0..1000);
        let field4 = rng.gen::<f64>() * 1000.0;
        let numbers: Vec<i32> = (0..NUMBERS_PER_ENTITY)
            .map(|_| rng.gen_range(0..100))
            .collect();
        let metadata: HashMap<String, i32> = HashMap::from([
            ("views".to_string(), rng.gen_range(0..10_000)),
            ("likes".to_string(), rng.gen_range(0..1_000)),
            ("shares".to_string(), rng.gen_range(0..100)),
        ]);

        Entity {
            id,
            name: format!("Entity_{id}"),
            email: format!("entity{id}@example.com"),
            created_at: self.anchor - Duration::days(age_days),
            data: NestedData {
                field1: format!("Field1_Value_{id}"),
                field2: format!("Field2_Value_{id}"),
                field3,
                field4,
                numbers,
            },
            tags: vec![
                "tag1".to_string(),
                "tag2".to_string(),
                "tag3".to_string(),
                format!("tag_{id}"),
            ],
            metadata,
        }
    }
}

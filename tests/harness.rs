// End-to-end runs of the harness against the in-memory backend

use kvbench::{run_full, run_quick, size_report};
use kvbench_config::{BenchConfig, StorageBackend, StorageConfig, WorkloadConfig};
use kvbench_core::{EntityGenerator, Serializer};

fn memory_storage() -> StorageConfig {
    StorageConfig {
        backend: StorageBackend::Memory,
        fs: None,
        redis: None,
    }
}

fn small_workload() -> WorkloadConfig {
    WorkloadConfig {
        entity_count: 30,
        individual_count: 5,
        chunk_size: 8,
        ..WorkloadConfig::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_quick_comparison_on_memory_store() {
    let store = kvbench::init_store(&memory_storage()).unwrap();
    let report = run_quick(store, &small_workload(), &Serializer::ALL)
        .await
        .unwrap();

    assert_eq!(report.backend, "memory");
    assert_eq!(report.entity_count, 30);
    assert_eq!(report.sizes.len(), 3);
    assert_eq!(report.serializers.len(), 3);

    for comparison in &report.serializers {
        assert!(comparison.round_trip, "{}", comparison.serializer);

        let plan: Vec<_> = comparison
            .timings
            .iter()
            .map(|t| (t.strategy, t.entities))
            .collect();
        assert_eq!(
            plan,
            vec![
                ("individual", 5),
                ("batch_await", 30),
                ("fire_and_forget", 30),
                ("chunked", 30),
            ]
        );
    }
}

#[tokio::test]
async fn test_individual_count_is_clamped() {
    let workload = WorkloadConfig {
        entity_count: 4,
        individual_count: 100,
        ..WorkloadConfig::default()
    };
    let store = kvbench::init_store(&memory_storage()).unwrap();
    let report = run_quick(store, &workload, &[Serializer::Json])
        .await
        .unwrap();

    assert_eq!(report.serializers[0].timings[0].entities, 4);
}

#[tokio::test]
async fn test_full_run_reports_every_pair() {
    let bench = BenchConfig {
        warmup_iterations: 0,
        sample_iterations: 3,
        serializers: vec![Serializer::MessagePack, Serializer::Protobuf],
    };
    let store = kvbench::init_store(&memory_storage()).unwrap();
    let results = run_full(store, &small_workload(), &bench).await.unwrap();

    assert_eq!(results.len(), 8);
    assert_eq!(results[0].serializer, "rmp-serde");
    assert_eq!(results[4].serializer, "prost");
    for result in &results {
        assert_eq!(result.summary.samples, 3);
        assert!(result.summary.min_ms <= result.summary.median_ms);
        assert!(result.summary.median_ms <= result.summary.max_ms);
    }
}

#[test]
fn test_size_report_order_and_ranking() {
    let entity = &EntityGenerator::default().generate(1)[0];
    let sizes = size_report(entity, &Serializer::ALL).unwrap();

    let names: Vec<_> = sizes.iter().map(|s| s.serializer).collect();
    assert_eq!(names, vec!["serde_json", "rmp-serde", "prost"]);
    assert!(sizes[2].bytes < sizes[0].bytes);
}

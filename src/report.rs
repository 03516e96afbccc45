// Plain-text rendering of run results

use std::fmt::Write as _;

use crate::compare::{QuickReport, SizeEntry};
use crate::full::FullResult;

pub fn render_sizes(sizes: &[SizeEntry]) -> String {
    let mut out = String::from("=== Serialization Size Comparison ===\n");
    for entry in sizes {
        let _ = writeln!(out, "{:<20}: {:>6} bytes", entry.serializer, entry.bytes);
    }
    out
}

pub fn render_quick(report: &QuickReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Serialization & Batching Comparison ===");
    let _ = writeln!(out, "- Backend: {}", report.backend);
    let _ = writeln!(out, "- Entity count: {}", report.entity_count);
    out.push('\n');
    out.push_str(&render_sizes(&report.sizes));

    for serializer in &report.serializers {
        let _ = writeln!(out, "\n=== {} ===", serializer.serializer);
        for timing in &serializer.timings {
            let label = format!("{} ({})", timing.strategy, timing.entities);
            let _ = writeln!(out, "{:<24} {:>10.2} ms", label, timing.elapsed_ms);
        }
        let _ = writeln!(
            out,
            "{:<24} {:>10}",
            "round trip",
            if serializer.round_trip { "ok" } else { "MISMATCH" }
        );
    }
    out
}

pub fn render_full(results: &[FullResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<16} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "serializer", "strategy", "entities", "mean", "median", "min", "max", "stddev"
    );
    for result in results {
        let s = &result.summary;
        let _ = writeln!(
            out,
            "{:<12} {:<16} {:>8} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
            result.serializer,
            result.strategy,
            result.entities,
            s.mean_ms,
            s.median_ms,
            s.min_ms,
            s.max_ms,
            s.stddev_ms
        );
    }
    let _ = writeln!(out, "(all times in ms)");
    out
}

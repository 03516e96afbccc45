// Summary statistics over timed samples

use serde::Serialize;
use std::time::Duration;

/// Sample summary in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub samples: usize,
    pub mean_ms: f64,
    pub median_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    /// Population standard deviation
    pub stddev_ms: f64,
}

impl Summary {
    /// `None` for an empty sample set.
    pub fn from_durations(samples: &[Duration]) -> Option<Self> {
        let millis: Vec<f64> = samples.iter().map(|d| d.as_secs_f64() * 1000.0).collect();
        Self::from_millis(&millis)
    }

    pub fn from_millis(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        };
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;

        Some(Self {
            samples: n,
            mean_ms: mean,
            median_ms: median,
            min_ms: sorted[0],
            max_ms: sorted[n - 1],
            stddev_ms: variance.sqrt(),
        })
    }
}

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Entities per batch for the chunked strategy unless configured otherwise
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// How a list of entities is grouped and awaited on its way to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteStrategy {
    /// One set per entity, each awaited before the next
    Individual,
    /// A single batch of everything, awaited as a group
    BatchWithAwait,
    /// A single batch of everything, submitted without waiting
    FireAndForget,
    /// Fixed-size batches, each awaited before the next is built
    Chunked { chunk_size: usize },
}

impl WriteStrategy {
    /// Every strategy in reporting order; chunked uses [`DEFAULT_CHUNK_SIZE`].
    pub const ALL: [WriteStrategy; 4] = [
        Self::Individual,
        Self::BatchWithAwait,
        Self::FireAndForget,
        Self::Chunked {
            chunk_size: DEFAULT_CHUNK_SIZE,
        },
    ];

    pub fn chunked() -> Self {
        Self::Chunked {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Stable label used in reports and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::BatchWithAwait => "batch_await",
            Self::FireAndForget => "fire_and_forget",
            Self::Chunked { .. } => "chunked",
        }
    }
}

impl fmt::Display for WriteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chunked { chunk_size } => write!(f, "chunked({chunk_size})"),
            other => f.write_str(other.name()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported write strategy: {0}. Supported: individual, batch_await, fire_and_forget, chunked[:N]")]
pub struct ParseStrategyError(String);

impl FromStr for WriteStrategy {
    type Err = ParseStrategyError;

    /// Accepts `chunked:250` to pick a chunk size.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        let (head, size) = match normalized.split_once(':') {
            Some((head, size)) => (head.to_string(), Some(size.to_string())),
            None => (normalized, None),
        };

        match (head.as_str(), size) {
            ("individual", None) => Ok(Self::Individual),
            ("batch_await" | "batch" | "batch_with_await", None) => Ok(Self::BatchWithAwait),
            ("fire_and_forget" | "fire_forget", None) => Ok(Self::FireAndForget),
            ("chunked", None) => Ok(Self::chunked()),
            ("chunked", Some(size)) => match size.parse::<usize>() {
                Ok(chunk_size) if chunk_size > 0 => Ok(Self::Chunked { chunk_size }),
                _ => Err(ParseStrategyError(s.to_string())),
            },
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

//! Batched entity writer for kvbench
//!
//! Four write strategies over one shared store:
//! - individual: one awaited set per entity
//! - batch with await: one batch, awaited as a group
//! - fire-and-forget: one batch, not awaited
//! - chunked: fixed-size awaited batches in sequence

mod error;
mod strategy;
mod writer;

pub use error::{ErrorCode, Result, WriterError};
pub use strategy::{ParseStrategyError, WriteStrategy, DEFAULT_CHUNK_SIZE};
pub use writer::EntityWriter;

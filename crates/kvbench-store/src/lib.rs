//! Key-value store abstraction for kvbench
//!
//! The writer talks to the store only through [`KvStore`]: single sets,
//! single gets and two ways of submitting a [`WriteBatch`]. How a batch is
//! put on the wire (pipelined, multiplexed, one request per key) is the
//! backend's business.

mod batch;
mod error;
mod opendal_store;

use async_trait::async_trait;

pub use batch::WriteBatch;
pub use error::{Result, StoreError, StoreOp};
pub use opendal_store::OpendalStore;

// Re-exported so callers can build operators and match on error kinds
pub use opendal;

/// String get/set store with batch submission.
///
/// Implementations must be shareable across tasks; one store instance backs
/// every strategy and serializer within a run.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Backend name used in logs and reports
    fn name(&self) -> &'static str;

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// `None` when the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Submit every queued write, then wait until all of them have settled.
    ///
    /// Returns the first failure in submission order.
    async fn execute_batch(&self, batch: WriteBatch) -> Result<()>;

    /// Enqueue every queued write and return without waiting.
    ///
    /// No completion handle is kept: failures are lost and the caller has no
    /// signal of when (or whether) the writes land.
    fn submit_batch(&self, batch: WriteBatch);
}

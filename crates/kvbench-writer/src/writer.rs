//! Entity writer
//!
//! Serializes entities with one [`Serializer`] and pushes them into a shared
//! [`KvStore`] using one of the four [`WriteStrategy`] policies. Strategies
//! differ only in how sets are grouped and whether completion is awaited;
//! the bytes written for an entity are the same under every strategy.

use std::sync::Arc;

use kvbench_core::{storage_key, Entity, Serializer};
use kvbench_store::{KvStore, WriteBatch};
use metrics::counter;
use tracing::debug;

use crate::error::{Result, WriterError};
use crate::strategy::WriteStrategy;

#[derive(Clone)]
pub struct EntityWriter {
    store: Arc<dyn KvStore>,
    serializer: Serializer,
}

impl std::fmt::Debug for EntityWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityWriter")
            .field("store", &self.store.name())
            .field("serializer", &self.serializer)
            .finish()
    }
}

impl EntityWriter {
    pub fn new(store: Arc<dyn KvStore>, serializer: Serializer) -> Self {
        Self { store, serializer }
    }

    pub fn serializer(&self) -> Serializer {
        self.serializer
    }

    pub fn store(&self) -> &Arc<dyn KvStore> {
        &self.store
    }

    /// Write each entity with its own set, awaiting each before the next.
    ///
    /// Completion order matches list order. Stops at the first failure;
    /// earlier entities stay written.
    pub async fn save_individual(&self, entities: &[Entity]) -> Result<()> {
        if entities.is_empty() {
            return Ok(());
        }

        for entity in entities {
            let bytes = self.serializer.serialize(entity)?;
            self.store.set(&entity.storage_key(), bytes).await?;
        }

        record_submission(WriteStrategy::Individual, entities.len(), 0);
        debug!(
            codec = self.serializer.name(),
            count = entities.len(),
            "Saved entities individually"
        );
        Ok(())
    }

    /// Queue every entity into one batch and await the whole group.
    pub async fn save_batch_with_await(&self, entities: &[Entity]) -> Result<()> {
        if entities.is_empty() {
            return Ok(());
        }

        let batch = self.build_batch(entities)?;
        self.store.execute_batch(batch).await?;

        record_submission(WriteStrategy::BatchWithAwait, entities.len(), 1);
        debug!(
            codec = self.serializer.name(),
            count = entities.len(),
            "Saved entities in one awaited batch"
        );
        Ok(())
    }

    /// Queue every entity into one batch and submit it without waiting.
    ///
    /// Returns as soon as the batch is handed to the store. A later store
    /// failure is never reported; only encoding errors surface here.
    pub fn save_batch_fire_and_forget(&self, entities: &[Entity]) -> Result<()> {
        if entities.is_empty() {
            return Ok(());
        }

        let batch = self.build_batch(entities)?;
        self.store.submit_batch(batch);

        record_submission(WriteStrategy::FireAndForget, entities.len(), 1);
        debug!(
            codec = self.serializer.name(),
            count = entities.len(),
            "Submitted fire-and-forget batch"
        );
        Ok(())
    }

    /// Split the list into consecutive chunks of `chunk_size` and write each
    /// as an awaited batch, in order.
    ///
    /// A chunk is only built once the previous one has completed, so at most
    /// one chunk is in flight. The last chunk may be short.
    pub async fn save_chunked(&self, entities: &[Entity], chunk_size: usize) -> Result<()> {
        if chunk_size == 0 {
            return Err(WriterError::InvalidChunkSize);
        }
        if entities.is_empty() {
            return Ok(());
        }

        let mut chunks = 0;
        for chunk in entities.chunks(chunk_size) {
            let batch = self.build_batch(chunk)?;
            self.store.execute_batch(batch).await?;
            chunks += 1;
        }

        record_submission(WriteStrategy::Chunked { chunk_size }, entities.len(), chunks);
        debug!(
            codec = self.serializer.name(),
            count = entities.len(),
            chunk_size,
            chunks,
            "Saved entities in chunks"
        );
        Ok(())
    }

    /// Write with the given strategy.
    pub async fn save(&self, strategy: WriteStrategy, entities: &[Entity]) -> Result<()> {
        match strategy {
            WriteStrategy::Individual => self.save_individual(entities).await,
            WriteStrategy::BatchWithAwait => self.save_batch_with_await(entities).await,
            WriteStrategy::FireAndForget => self.save_batch_fire_and_forget(entities),
            WriteStrategy::Chunked { chunk_size } => self.save_chunked(entities, chunk_size).await,
        }
    }

    /// Read the entity stored under `id`.
    ///
    /// `None` when the key is absent or holds an empty value.
    pub async fn get(&self, id: i32) -> Result<Option<Entity>> {
        let Some(bytes) = self.store.get(&storage_key(id)).await? else {
            return Ok(None);
        };
        if bytes.is_empty() {
            return Ok(None);
        }

        Ok(Some(self.serializer.deserialize(&bytes)?))
    }

    /// Encode every entity before anything reaches the store.
    fn build_batch(&self, entities: &[Entity]) -> Result<WriteBatch> {
        let mut batch = WriteBatch::with_capacity(entities.len());
        for entity in entities {
            batch.push(entity.storage_key(), self.serializer.serialize(entity)?);
        }
        Ok(batch)
    }
}

fn record_submission(strategy: WriteStrategy, writes: usize, batches: usize) {
    counter!("kvbench.writes.submitted", "strategy" => strategy.name()).increment(writes as u64);
    if batches > 0 {
        counter!("kvbench.batches.submitted", "strategy" => strategy.name())
            .increment(batches as u64);
    }
}

//! OpenDAL-backed store
//!
//! One operator serves the whole run. Memory and filesystem backends are
//! for local runs and tests; the Redis backend talks to a real server over a
//! multiplexed connection, so a batch's writes share it concurrently.

use async_trait::async_trait;
use futures::future::join_all;
use kvbench_config::{StorageBackend, StorageConfig};
use opendal::{ErrorKind, Operator};
use tracing::{debug, info, warn};

use crate::batch::WriteBatch;
use crate::error::{Result, StoreError, StoreOp};
use crate::KvStore;

#[derive(Clone)]
pub struct OpendalStore {
    operator: Operator,
    backend: &'static str,
}

impl std::fmt::Debug for OpendalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpendalStore")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl OpendalStore {
    /// Wrap an existing operator.
    pub fn new(operator: Operator, backend: &'static str) -> Self {
        Self { operator, backend }
    }

    /// Process-local store, empty on creation.
    pub fn memory() -> Result<Self> {
        let operator = Operator::new(opendal::services::Memory::default())
            .map_err(|e| StoreError::init("memory", e))?
            .finish();
        Ok(Self::new(operator, "memory"))
    }

    /// Build the operator selected by `config.backend`.
    pub fn from_config(config: &StorageConfig) -> Result<Self> {
        let store = match config.backend {
            StorageBackend::Memory => {
                info!("Using in-memory store");
                Self::memory()?
            }
            StorageBackend::Fs => {
                let fs = config.fs.as_ref().ok_or_else(|| {
                    StoreError::invalid_config("fs", "fs config required for filesystem backend")
                })?;
                info!("Using filesystem store at: {}", fs.path);

                let fs_builder = opendal::services::Fs::default().root(&fs.path);
                let operator = Operator::new(fs_builder)
                    .map_err(|e| StoreError::init("fs", e))?
                    .finish();
                Self::new(operator, "fs")
            }
            StorageBackend::Redis => {
                let redis = config.redis.as_ref().ok_or_else(|| {
                    StoreError::invalid_config("redis", "redis config required for redis backend")
                })?;
                info!("Using redis store: endpoint={}, db={}", redis.endpoint, redis.db);

                let mut redis_builder = opendal::services::Redis::default()
                    .endpoint(&redis.endpoint)
                    .db(redis.db);

                if let Some(username) = &redis.username {
                    redis_builder = redis_builder.username(username);
                }

                if let Some(password) = &redis.password {
                    redis_builder = redis_builder.password(password);
                }

                let operator = Operator::new(redis_builder)
                    .map_err(|e| StoreError::init("redis", e))?
                    .finish();
                Self::new(operator, "redis")
            }
        };

        Ok(store)
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }
}

async fn write(operator: &Operator, key: String, value: Vec<u8>) -> Result<()> {
    operator
        .write(&key, value)
        .await
        .map(|_| ())
        .map_err(|e| StoreError::operation(StoreOp::Set, key, e))
}

async fn write_all(operator: &Operator, batch: WriteBatch) -> Vec<Result<()>> {
    join_all(
        batch
            .into_iter()
            .map(|(key, value)| write(operator, key, value)),
    )
    .await
}

#[async_trait]
impl KvStore for OpendalStore {
    fn name(&self) -> &'static str {
        self.backend
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        write(&self.operator, key.to_string(), value).await
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.operator.read(key).await {
            Ok(buffer) if buffer.is_empty() => Ok(None),
            Ok(buffer) => Ok(Some(buffer.to_vec())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::operation(StoreOp::Get, key, e)),
        }
    }

    async fn execute_batch(&self, batch: WriteBatch) -> Result<()> {
        let size = batch.len();
        let results = write_all(&self.operator, batch).await;

        debug!(backend = self.backend, size, "Batch settled");
        results.into_iter().collect()
    }

    fn submit_batch(&self, batch: WriteBatch) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(
                backend = self.backend,
                size = batch.len(),
                "No async runtime available; fire-and-forget batch dropped"
            );
            return;
        };

        let operator = self.operator.clone();
        // Detached: no join handle is retained.
        drop(runtime.spawn(async move {
            write_all(&operator, batch).await;
        }));
    }
}

//! Shared test doubles for writer integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use kvbench_store::opendal::{Error as OpendalError, ErrorKind};
use kvbench_store::{KvStore, Result, StoreError, StoreOp, WriteBatch};

/// One call observed by [`RecordingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Set(String),
    Execute(Vec<String>),
    Submit(Vec<String>),
}

/// In-memory store that remembers every call in order.
#[derive(Default)]
pub struct RecordingStore {
    calls: Mutex<Vec<Call>>,
    values: Mutex<HashMap<String, Vec<u8>>>,
}

impl RecordingStore {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.values.lock().unwrap().len()
    }

    pub fn insert_raw(&self, key: &str, value: Vec<u8>) {
        self.values.lock().unwrap().insert(key.to_string(), value);
    }

    /// Keys in the order they were handed to the store, across all calls.
    pub fn submitted_keys(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .flat_map(|call| match call {
                Call::Set(key) => vec![key],
                Call::Execute(keys) | Call::Submit(keys) => keys,
            })
            .collect()
    }

    fn apply(&self, batch: WriteBatch) -> Vec<String> {
        let mut values = self.values.lock().unwrap();
        batch
            .into_iter()
            .map(|(key, value)| {
                values.insert(key.clone(), value);
                key
            })
            .collect()
    }
}

#[async_trait]
impl KvStore for RecordingStore {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        self.calls.lock().unwrap().push(Call::Set(key.to_string()));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.value(key))
    }

    async fn execute_batch(&self, batch: WriteBatch) -> Result<()> {
        let keys = self.apply(batch);
        self.calls.lock().unwrap().push(Call::Execute(keys));
        Ok(())
    }

    fn submit_batch(&self, batch: WriteBatch) {
        let keys = self.apply(batch);
        self.calls.lock().unwrap().push(Call::Submit(keys));
    }
}

/// Store whose awaited operations always fail.
#[derive(Default)]
pub struct FailingStore {
    submitted: Mutex<usize>,
}

impl FailingStore {
    pub fn submitted(&self) -> usize {
        *self.submitted.lock().unwrap()
    }

    fn failure(op: StoreOp, key: &str) -> StoreError {
        StoreError::operation(op, key, OpendalError::new(ErrorKind::Unexpected, "connection reset"))
    }
}

#[async_trait]
impl KvStore for FailingStore {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn set(&self, key: &str, _value: Vec<u8>) -> Result<()> {
        Err(Self::failure(StoreOp::Set, key))
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Err(Self::failure(StoreOp::Get, key))
    }

    async fn execute_batch(&self, batch: WriteBatch) -> Result<()> {
        let key = batch.keys().next().unwrap_or_default().to_string();
        Err(Self::failure(StoreOp::Set, &key))
    }

    fn submit_batch(&self, _batch: WriteBatch) {
        // failures are unobservable to the caller
        *self.submitted.lock().unwrap() += 1;
    }
}

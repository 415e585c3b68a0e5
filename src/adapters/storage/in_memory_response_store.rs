//! In-memory response store for tests and local development.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::survey::SubmissionRecord;
use crate::ports::{ResponseStore, ResponseStoreError};

/// Keeps submitted records in memory.
#[derive(Debug, Default)]
pub struct InMemoryResponseStore {
    records: Mutex<Vec<SubmissionRecord>>,
}

impl InMemoryResponseStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything saved so far.
    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ResponseStore for InMemoryResponseStore {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), ResponseStoreError> {
        self.records
            .lock()
            .map_err(|e| ResponseStoreError::Io(e.to_string()))?
            .push(record.clone());
        Ok(())
    }
}

//! Response store port - write-once persistence for submission records.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::survey::SubmissionRecord;

/// Errors from the response store.
#[derive(Debug, Clone, Error)]
pub enum ResponseStoreError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

/// Persistence boundary for submitted survey responses.
///
/// Records are written once and never mutated; the store offers no update
/// or delete surface.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Persists one submission record.
    async fn save(&self, record: &SubmissionRecord) -> Result<(), ResponseStoreError>;
}

//! File-based Response Store Adapter
//!
//! Writes one JSON document per submission into a base directory. Files are
//! named by timestamp plus a short response-id prefix and are never touched
//! again after the initial write.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::survey::SubmissionRecord;
use crate::ports::{ResponseStore, ResponseStoreError};

/// File-based storage for submitted survey responses.
#[derive(Debug, Clone)]
pub struct FileResponseStore {
    base_path: PathBuf,
}

impl FileResponseStore {
    /// Create a new file store rooted at a base directory.
    ///
    /// # Example
    /// ```ignore
    /// let store = FileResponseStore::new("./data/responses");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Full path for a record's file.
    fn record_path(&self, record: &SubmissionRecord) -> PathBuf {
        self.base_path.join(record.file_name())
    }

    /// Ensure the base directory exists.
    async fn ensure_base_dir(&self) -> Result<(), ResponseStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| ResponseStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl ResponseStore for FileResponseStore {
    async fn save(&self, record: &SubmissionRecord) -> Result<(), ResponseStoreError> {
        self.ensure_base_dir().await?;

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| ResponseStoreError::SerializationFailed(e.to_string()))?;

        let path = self.record_path(record);
        fs::write(&path, json)
            .await
            .map_err(|e| ResponseStoreError::Io(e.to_string()))?;

        tracing::debug!(path = %path.display(), "persisted survey response");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::survey::{RespondentProfile, WeightEntry};
    use crate::domain::weighting::LabeledMatrix;
    use chrono::Utc;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn test_record() -> SubmissionRecord {
        SubmissionRecord {
            response_id: Uuid::new_v4(),
            saved_at_utc: Utc::now(),
            respondent: RespondentProfile {
                age_range: "25-44".to_string(),
                field_of_work: "Environment".to_string(),
                field_of_work_other: None,
                difficulty_feedback: Some("Pair three was hard to rate".to_string()),
                suggestions: None,
            },
            criteria: vec!["X".to_string(), "Y".to_string()],
            weights: vec![
                WeightEntry {
                    criterion: "X".to_string(),
                    weight: 0.9,
                },
                WeightEntry {
                    criterion: "Y".to_string(),
                    weight: 0.1,
                },
            ],
            consistency_ratio: 0.0,
            lambda_max: 2.0,
            comparison_matrix: LabeledMatrix {
                index: vec!["X".to_string(), "Y".to_string()],
                columns: vec!["X".to_string(), "Y".to_string()],
                values: vec![vec![1.0, 9.0], vec![1.0 / 9.0, 1.0]],
            },
        }
    }

    #[tokio::test]
    async fn save_writes_one_json_file_per_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());

        let record = test_record();
        store.save(&record).await.unwrap();

        let path = temp_dir.path().join(record.file_name());
        assert!(path.exists());

        let contents = std::fs::read_to_string(&path).unwrap();
        let loaded: SubmissionRecord = serde_json::from_str(&contents).unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn save_creates_missing_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data").join("responses");
        let store = FileResponseStore::new(&nested);

        store.save(&test_record()).await.unwrap();

        assert!(nested.exists());
    }

    #[tokio::test]
    async fn distinct_records_get_distinct_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileResponseStore::new(temp_dir.path());

        let first = test_record();
        let second = test_record();
        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        let count = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(count, 2);
    }
}

//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory where submission records are written
    #[serde(default = "default_responses_dir")]
    pub responses_dir: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.responses_dir.as_os_str().is_empty() {
            return Err(ValidationError::InvalidResponsesDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            responses_dir: default_responses_dir(),
        }
    }
}

fn default_responses_dir() -> PathBuf {
    PathBuf::from("./data/responses")
}

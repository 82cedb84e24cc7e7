use std::fs;
use std::path::PathBuf;

use crate::domain::{
    chat::{entities::ChatMessage, ports::HistoryStore},
    common::entities::app_errors::CoreError,
};

/// File-backed analogue of the browser's local-storage history record. One
/// JSON document holds the ordered, sanitized message log; an absent file
/// means empty history.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<Vec<ChatMessage>, CoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let data = fs::read_to_string(&self.path)
            .map_err(|e| CoreError::StorageError(e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| CoreError::StorageError(e.to_string()))
    }

    fn save(&self, history: &[ChatMessage]) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let data =
            serde_json::to_string(history).map_err(|e| CoreError::StorageError(e.to_string()))?;
        fs::write(&self.path, data).map_err(|e| CoreError::StorageError(e.to_string()))
    }

    fn clear(&self) -> Result<(), CoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        Ok(())
    }
}

//! JSON history snapshot repository.
//!
//! Implements `HistoryRepository` from `mediq-core` over a single JSON file
//! of the shape `{ "history": [ChatSession...] }` with RFC 3339 timestamps.
//! Writes go through a sibling temp file and an atomic rename, so a crash
//! mid-write never truncates the snapshot.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use mediq_core::session::repository::HistoryRepository;
use mediq_types::consult::ChatSession;
use mediq_types::error::RepositoryError;

/// On-disk layout of the history snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub history: Vec<ChatSession>,
}

/// File-backed implementation of `HistoryRepository`.
pub struct JsonHistoryRepository {
    path: PathBuf,
}

impl JsonHistoryRepository {
    /// Create a repository over the given snapshot file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Whether a snapshot file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl HistoryRepository for JsonHistoryRepository {
    async fn load(&self) -> Result<Vec<ChatSession>, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot file, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        let snapshot: HistorySnapshot = serde_json::from_str(&raw)?;
        Ok(snapshot.history)
    }

    async fn persist(&self, history: &[ChatSession]) -> Result<(), RepositoryError> {
        let snapshot = HistorySnapshot {
            history: history.to_vec(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json.as_bytes()).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(
            path = %self.path.display(),
            sessions = history.len(),
            "persisted history snapshot"
        );
        Ok(())
    }
}

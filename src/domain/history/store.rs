use super::error::HistoryError;
use super::model::{HistoryLog, NewHistoryEntry, MAX_HISTORY};
use crate::infrastructure::repositories::HistoryRepository;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Durable, capacity-bounded, newest-first log of synthesis results.
///
/// State lives in the injected repository: every read loads, every append
/// saves. Appends are serialized so load-prepend-save never interleaves.
pub struct HistoryStore {
    repository: Arc<dyn HistoryRepository>,
    capacity: usize,
    append_lock: Mutex<()>,
}

impl HistoryStore {
    pub fn new(repository: Arc<dyn HistoryRepository>) -> Self {
        Self {
            repository,
            capacity: MAX_HISTORY,
            append_lock: Mutex::new(()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read the persisted log.
    ///
    /// History is advisory: an unreadable or corrupt document yields an empty
    /// log instead of an error.
    pub async fn load(&self) -> HistoryLog {
        match self.repository.load().await {
            Ok(log) => log,
            Err(e) => {
                tracing::warn!(error = %e, "History log unreadable, starting from empty history");
                HistoryLog::default()
            }
        }
    }

    /// Check that the persisted log can be read, returning its length.
    /// Unlike `load`, a corrupt document is reported.
    pub async fn probe(&self) -> Result<usize, HistoryError> {
        self.repository
            .load()
            .await
            .map(|log| log.len())
            .map_err(|e| HistoryError::Storage(e.to_string()))
    }

    /// Replace the persisted log
    pub async fn save(&self, log: &HistoryLog) -> Result<(), HistoryError> {
        self.repository
            .save(log)
            .await
            .map_err(|e| HistoryError::Storage(e.to_string()))
    }

    /// Prepend a new record, evict beyond capacity, persist, and return the new log
    pub async fn append(&self, entry: NewHistoryEntry) -> Result<HistoryLog, HistoryError> {
        if entry.audio_url.trim().is_empty() {
            return Err(HistoryError::IncompleteEntry);
        }

        let _guard = self.append_lock.lock().await;

        let mut log = self.load().await;
        let evicted = log.push_front_bounded(entry.stamp(Utc::now()), self.capacity);

        if evicted > 0 {
            tracing::debug!(evicted, capacity = self.capacity, "Evicted oldest history entries");
        }

        self.save(&log).await?;

        tracing::info!(entries = log.len(), "History entry appended");

        Ok(log)
    }
}

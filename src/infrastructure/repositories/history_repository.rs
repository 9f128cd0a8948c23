use crate::domain::history::{HistoryEntry, HistoryLog};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum HistoryRepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed history document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("history storage lock poisoned")]
    LockPoisoned,
}

/// Storage backend for the history log.
///
/// Implementations persist the whole log as a single document and must never
/// expose a partially written document to `load`.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Read the persisted log. A missing document is an empty log.
    async fn load(&self) -> Result<HistoryLog, HistoryRepositoryError>;

    /// Replace the persisted log with `log`
    async fn save(&self, log: &HistoryLog) -> Result<(), HistoryRepositoryError>;
}

/// Decode a persisted document.
///
/// Only a document that is not a JSON array is malformed. Irregular records
/// inside the array are skipped one by one so the rest of the log survives.
pub(crate) fn decode_history(bytes: &[u8]) -> Result<HistoryLog, HistoryRepositoryError> {
    let records: Vec<Value> = serde_json::from_slice(bytes)?;

    let entries = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<HistoryEntry>(record) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping irregular history record");
                None
            }
        })
        .collect();

    Ok(HistoryLog::new(entries))
}

pub(crate) fn encode_history(log: &HistoryLog) -> Result<Vec<u8>, HistoryRepositoryError> {
    Ok(serde_json::to_vec_pretty(log)?)
}

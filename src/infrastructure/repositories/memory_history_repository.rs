use super::history_repository::{
    decode_history, encode_history, HistoryRepository, HistoryRepositoryError,
};
use crate::domain::history::HistoryLog;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory history storage (for testing).
///
/// Holds the encoded document rather than the decoded log so that loads go
/// through the same parsing path as the file backend.
pub struct InMemoryHistoryRepository {
    document: Mutex<Option<Vec<u8>>>,
    fail_writes: bool,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            document: Mutex::new(None),
            fail_writes: false,
        }
    }

    /// Start from a raw persisted document, valid or not
    pub fn with_document(document: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
            fail_writes: false,
        }
    }

    /// Storage that rejects every write with a permission error
    pub fn read_only() -> Self {
        Self {
            document: Mutex::new(None),
            fail_writes: true,
        }
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn load(&self) -> Result<HistoryLog, HistoryRepositoryError> {
        let document = self
            .document
            .lock()
            .map_err(|_| HistoryRepositoryError::LockPoisoned)?;

        match document.as_deref() {
            Some(bytes) => decode_history(bytes),
            None => Ok(HistoryLog::default()),
        }
    }

    async fn save(&self, log: &HistoryLog) -> Result<(), HistoryRepositoryError> {
        if self.fail_writes {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "history storage is read-only",
            )
            .into());
        }

        let encoded = encode_history(log)?;
        let mut document = self
            .document
            .lock()
            .map_err(|_| HistoryRepositoryError::LockPoisoned)?;
        *document = Some(encoded);
        Ok(())
    }
}

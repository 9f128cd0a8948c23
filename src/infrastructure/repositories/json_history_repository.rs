use super::history_repository::{
    decode_history, encode_history, HistoryRepository, HistoryRepositoryError,
};
use crate::domain::history::HistoryLog;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// History log stored as one pretty-printed JSON file.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the target,
/// so readers see either the previous document or the new one.
pub struct JsonFileHistoryRepository {
    path: PathBuf,
}

impl JsonFileHistoryRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "history.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl HistoryRepository for JsonFileHistoryRepository {
    async fn load(&self) -> Result<HistoryLog, HistoryRepositoryError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HistoryLog::default()),
            Err(e) => return Err(e.into()),
        };

        decode_history(&bytes)
    }

    async fn save(&self, log: &HistoryLog) -> Result<(), HistoryRepositoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let document = encode_history(log)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, document).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        tracing::debug!(
            path = %self.path.display(),
            entries = log.len(),
            "History log written"
        );

        Ok(())
    }
}

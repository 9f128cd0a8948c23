use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history entry has no audio URL")]
    IncompleteEntry,
    #[error("history storage error: {0}")]
    Storage(String),
}

impl From<HistoryError> for AppError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::IncompleteEntry => AppError::BadRequest(err.to_string()),
            HistoryError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

pub mod history_repository;
pub mod http_tts_repository;
pub mod json_history_repository;
pub mod memory_history_repository;
pub mod tts_repository;

pub use history_repository::{HistoryRepository, HistoryRepositoryError};
pub use http_tts_repository::HttpTtsRepository;
pub use json_history_repository::JsonFileHistoryRepository;
pub use memory_history_repository::InMemoryHistoryRepository;
pub use tts_repository::TtsRepository;

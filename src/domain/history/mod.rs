pub mod error;
pub mod model;
pub mod preview;
pub mod store;

pub use error::HistoryError;
pub use model::{
    HistoryEntry, HistoryLog, HistoryRow, HistorySummary, NewHistoryEntry, MAX_HISTORY,
    TABLE_HEADERS,
};
pub use preview::{format_preview, parse_selection};
pub use store::HistoryStore;

use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to render the history panel
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryView {
    pub options: Vec<HistorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    pub headers: Vec<String>,
    pub table: Vec<HistoryRow>,
}

impl HistoryView {
    /// View of `log` with the newest entry selected
    pub fn newest_selected(log: &HistoryLog) -> Self {
        let options = log.summaries();
        let selected = options.first().map(|s| s.label.clone());
        Self::build(log, options, selected)
    }

    /// View of `log` with `selected` echoed back as the current selection
    pub fn with_selection(log: &HistoryLog, selected: Option<String>) -> Self {
        Self::build(log, log.summaries(), selected)
    }

    fn build(log: &HistoryLog, options: Vec<HistorySummary>, selected: Option<String>) -> Self {
        Self {
            options,
            selected,
            headers: TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
            table: log.table(),
        }
    }
}

/// Replay payload for a single history entry
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryResponse {
    pub text: String,
    pub model: String,
    pub audio_url: String,
    pub message: String,
    pub tailuo: String,
    pub ipa: String,
    pub time: String,
}

impl From<&HistoryEntry> for EntryResponse {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            text: entry.text.clone(),
            model: entry.model.clone(),
            audio_url: entry.audio_url.clone(),
            message: entry.message.clone().unwrap_or_default(),
            tailuo: entry.tailuo.clone().unwrap_or_default(),
            ipa: entry.ipa.clone().unwrap_or_default(),
            time: entry.time_label(),
        }
    }
}

use super::preview::format_preview;
use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of records kept in the history log
pub const MAX_HISTORY: usize = 50;

/// Column headers of the history table, in row order
pub const TABLE_HEADERS: [&str; 4] = ["Time (UTC)", "Model", "Text", "Audio URL"];

/// One persisted synthesis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub model: String,
    pub audio_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailuo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    #[serde(alias = "time")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// ISO-8601 rendering used in labels and table rows.
    /// Microseconds are shown unless the timestamp falls on a whole second.
    pub fn time_label(&self) -> String {
        let format = if self.timestamp.nanosecond() == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };
        self.timestamp.to_rfc3339_opts(format, false)
    }

    pub fn preview(&self) -> String {
        format_preview(&self.text)
    }
}

/// A synthesis result that has not been appended yet.
/// The timestamp is assigned by the store at append time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHistoryEntry {
    pub text: String,
    pub model: String,
    pub audio_url: String,
    pub message: Option<String>,
    pub tailuo: Option<String>,
    pub ipa: Option<String>,
}

impl NewHistoryEntry {
    pub fn new(text: impl Into<String>, model: impl Into<String>, audio_url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: model.into(),
            audio_url: audio_url.into(),
            message: None,
            tailuo: None,
            ipa: None,
        }
    }

    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    pub fn with_tailuo(mut self, tailuo: Option<String>) -> Self {
        self.tailuo = tailuo;
        self
    }

    pub fn with_ipa(mut self, ipa: Option<String>) -> Self {
        self.ipa = ipa;
        self
    }

    pub(crate) fn stamp(self, timestamp: DateTime<Utc>) -> HistoryEntry {
        HistoryEntry {
            text: self.text,
            model: self.model,
            audio_url: self.audio_url,
            message: self.message,
            tailuo: self.tailuo,
            ipa: self.ipa,
            timestamp,
        }
    }
}

/// Selectable summary of a history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub index: usize,
    pub label: String,
}

/// One row of the tabular history view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub time: String,
    pub model: String,
    pub text: String,
    pub audio_url: String,
}

/// Newest-first ordered log of synthesis records.
///
/// Serialized as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog(Vec<HistoryEntry>);

impl HistoryLog {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        Self(entries)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Newest entry, if any
    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.0.first()
    }

    /// Put `entry` in front and keep at most `capacity` records.
    /// Returns the number of evicted records.
    pub(crate) fn push_front_bounded(&mut self, entry: HistoryEntry, capacity: usize) -> usize {
        self.0.insert(0, entry);
        let evicted = self.0.len().saturating_sub(capacity);
        self.0.truncate(capacity);
        evicted
    }

    /// Record at `index`, or `None` when the index is negative or past the end
    pub fn lookup(&self, index: i64) -> Option<&HistoryEntry> {
        usize::try_from(index).ok().and_then(|i| self.0.get(i))
    }

    /// Selectable labels, one per record, in log order
    pub fn summaries(&self) -> Vec<HistorySummary> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, entry)| HistorySummary {
                index,
                label: format!(
                    "{}|{} · {} · {}",
                    index,
                    entry.time_label(),
                    entry.model,
                    entry.preview()
                ),
            })
            .collect()
    }

    /// Table rows, one per record, in log order
    pub fn table(&self) -> Vec<HistoryRow> {
        self.0
            .iter()
            .map(|entry| HistoryRow {
                time: entry.time_label(),
                model: entry.model.clone(),
                text: entry.preview(),
                audio_url: entry.audio_url.clone(),
            })
            .collect()
    }
}

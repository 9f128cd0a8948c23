use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::history::{parse_selection, EntryResponse, HistoryStore, HistoryView},
    error::AppResult,
};

#[derive(Debug, Deserialize)]
pub struct SelectQuery {
    #[serde(default)]
    pub selection: Option<String>,
}

/// Response for GET /api/history/select
#[derive(Debug, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub entry: Option<EntryResponse>,
    pub history: HistoryView,
}

pub struct HistoryController {
    history: Arc<HistoryStore>,
}

impl HistoryController {
    pub fn new(history: Arc<HistoryStore>) -> Self {
        Self { history }
    }

    /// GET /api/history - Reload the history panel
    pub async fn list(State(controller): State<Arc<HistoryController>>) -> AppResult<Json<HistoryView>> {
        let log = controller.history.load().await;
        Ok(Json(HistoryView::newest_selected(&log)))
    }

    /// GET /api/history/select?selection=... - Replay a history entry
    ///
    /// An empty, unparseable, or out-of-range selection is not an error: the
    /// entry is null and the history panel is returned unchanged.
    pub async fn select(
        State(controller): State<Arc<HistoryController>>,
        Query(query): Query<SelectQuery>,
    ) -> AppResult<Json<SelectionResponse>> {
        let log = controller.history.load().await;
        let selection = query.selection.unwrap_or_default();

        let entry = parse_selection(&selection).and_then(|index| log.lookup(index));

        let response = match entry {
            Some(entry) => SelectionResponse {
                entry: Some(EntryResponse::from(entry)),
                history: HistoryView::with_selection(&log, Some(selection)),
            },
            None => {
                tracing::debug!(selection = %selection, entries = log.len(), "History selection not found");
                SelectionResponse {
                    entry: None,
                    history: HistoryView::with_selection(&log, None),
                }
            }
        };

        Ok(Json(response))
    }
}

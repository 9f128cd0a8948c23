use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::history::HistoryStore;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness: the service keeps working on a corrupt history log (it starts
/// over from empty), so an unreadable log degrades rather than fails
pub async fn health_ready(State(history): State<Arc<HistoryStore>>) -> impl IntoResponse {
    match history.probe().await {
        Ok(entries) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "history": "readable",
                "entries": entries,
                "capacity": history.capacity(),
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "History log failed readiness probe");
            (
                StatusCode::OK,
                Json(json!({
                    "status": "degraded",
                    "history": "unreadable",
                    "entries": 0,
                    "capacity": history.capacity(),
                })),
            )
        }
    }
}

pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{health, history::HistoryController, tts::TtsController};
use crate::domain::history::HistoryStore;
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the application router with all routes configured
pub fn build_router(
    history: Arc<HistoryStore>,
    history_controller: Arc<HistoryController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    let tts_routes = Router::new()
        .route("/api/tts/synthesize", post(TtsController::synthesize))
        .route("/api/tts/models", get(TtsController::list_models))
        .with_state(tts_controller);

    let history_routes = Router::new()
        .route("/api/history", get(HistoryController::list))
        .route("/api/history/select", get(HistoryController::select))
        .with_state(history_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(history)
        .merge(tts_routes)
        .merge(history_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(config: Arc<Config>, app: Router) -> Result<(), Box<dyn std::error::Error>> {
    let app = if config.is_development() {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

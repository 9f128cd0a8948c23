use std::sync::Arc;
use taigi_tts::controllers::{history::HistoryController, tts::TtsController};
use taigi_tts::domain::history::HistoryStore;
use taigi_tts::domain::tts::TtsService;
use taigi_tts::infrastructure::config::{Config, LogFormat};
use taigi_tts::infrastructure::http::{build_router, start_http_server};
use taigi_tts::infrastructure::repositories::{HttpTtsRepository, JsonFileHistoryRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting Taigi TTS on {}:{}",
        config.host,
        config.port
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    let history_repo = Arc::new(JsonFileHistoryRepository::new(&config.history_path));
    tracing::info!(path = %history_repo.path().display(), "History log location");

    let tts_repo = Arc::new(HttpTtsRepository::new(
        config.tts_api_url.clone(),
        &config.tts_api_origin,
        config.tts_timeout(),
    )?);
    tracing::info!(
        api_url = tts_repo.api_url(),
        timeout_secs = config.tts_timeout_secs,
        models = ?config.tts_models,
        cache_enabled = config.tts_cache_enabled,
        "Upstream TTS client initialized"
    );

    // 2. Services
    let history = Arc::new(HistoryStore::new(history_repo));
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        history.clone(),
        config.tts_models.clone(),
        config.tts_cache_enabled,
    ));

    // 3. Controllers
    let history_controller = Arc::new(HistoryController::new(history.clone()));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    let app = build_router(history, history_controller, tts_controller);

    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "taigi_tts=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

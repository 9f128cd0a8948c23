use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use taigi_tts::controllers::{history::HistoryController, tts::TtsController};
use taigi_tts::domain::history::HistoryStore;
use taigi_tts::domain::tts::TtsService;
use taigi_tts::infrastructure::config::{Config, Environment, LogFormat};
use taigi_tts::infrastructure::http::build_router;
use taigi_tts::infrastructure::repositories::{HttpTtsRepository, JsonFileHistoryRepository};
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod fake_upstream;

use api_client::TestClient;
use fake_upstream::FakeUpstream;

pub struct TestContext {
    pub client: TestClient,
    pub config: Config,
    pub upstream: FakeUpstream,
    data_dir: PathBuf,
}

impl TestContext {
    pub fn history_path(&self) -> &PathBuf {
        &self.config.history_path
    }

    /// Submit `text` for synthesis with the default model
    pub async fn synthesize(&self, text: &str) -> Result<api_client::ApiResponse> {
        self.client
            .post("/api/tts/synthesize", &serde_json::json!({ "text": text }))
            .await
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let upstream = FakeUpstream::start()
                .await
                .expect("Failed to start fake upstream");

            // Each test gets its own history file
            let data_dir = std::env::temp_dir().join(format!("taigi_tts_e2e_{}", uuid::Uuid::new_v4()));

            let config = Config {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: Environment::Development,
                log_format: LogFormat::Pretty,
                tts_api_url: upstream.url.clone(),
                tts_api_origin: "https://learn-language.tokyo".to_string(),
                tts_timeout_secs: 5,
                tts_models: vec!["model6".to_string(), "model7".to_string()],
                tts_cache_enabled: false,
                history_path: data_dir.join("data").join("history.json"),
            };

            let app = create_app(&config).expect("Failed to create app");

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            tokio::time::sleep(Duration::from_millis(50)).await;

            Self {
                client: TestClient::new(&base_url),
                config,
                upstream,
                data_dir,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async move {
            let _ = tokio::fs::remove_dir_all(&self.data_dir).await;
        }
    }
}

fn create_app(config: &Config) -> Result<axum::Router> {
    let history_repo = Arc::new(JsonFileHistoryRepository::new(&config.history_path));
    let tts_repo = Arc::new(
        HttpTtsRepository::new(
            config.tts_api_url.clone(),
            &config.tts_api_origin,
            config.tts_timeout(),
        )
        .map_err(anyhow::Error::msg)?,
    );

    let history = Arc::new(HistoryStore::new(history_repo));
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        history.clone(),
        config.tts_models.clone(),
        config.tts_cache_enabled,
    ));

    Ok(build_router(
        history.clone(),
        Arc::new(HistoryController::new(history)),
        Arc::new(TtsController::new(tts_service)),
    ))
}

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Text that makes the fake upstream answer without any audio URL
pub const NO_AUDIO_TEXT: &str = "no audio please";
/// Text that makes the fake upstream fail with HTTP 500
pub const FAILING_TEXT: &str = "upstream should fail";

/// Stand-in for the remote TTS service
pub struct FakeUpstream {
    pub url: String,
    calls: Arc<AtomicUsize>,
}

impl FakeUpstream {
    pub async fn start() -> anyhow::Result<Self> {
        let calls = Arc::new(AtomicUsize::new(0));

        let app = Router::new()
            .route("/taigi-text-to-speech", post(synthesize))
            .with_state(calls.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            url: format!("http://{}/taigi-text-to-speech", addr),
            calls,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

async fn synthesize(
    State(calls): State<Arc<AtomicUsize>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let n = calls.fetch_add(1, Ordering::SeqCst);
    let text = body["text"].as_str().unwrap_or_default();
    let model = body["model"].as_str().unwrap_or_default();

    match text {
        NO_AUDIO_TEXT => (StatusCode::OK, Json(json!({ "message": "nothing to say" }))),
        FAILING_TEXT => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "synthesis backend down" })),
        ),
        _ => (
            StatusCode::OK,
            Json(json!({
                "converted_audio_url": format!("http://audio.test/{}/{}.wav", model, n),
                "message": "ok",
                "tailuo": format!("tailuo:{}", text),
                "ipa": format!("ipa:{}", text),
            })),
        ),
    }
}

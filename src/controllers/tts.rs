use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::{
        history::HistoryView,
        tts::{ModelsResponse, SynthesizeResponse, TtsRequest, TtsService, TtsServiceApi},
    },
    error::AppResult,
};

/// Status shown when the upstream service sends no message
const DEFAULT_STATUS_MESSAGE: &str = "Done";

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts/synthesize - Convert text to speech and record it
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<Json<SynthesizeResponse>> {
        let result = controller
            .tts_service
            .synthesize(request.text, request.model)
            .await?;

        tracing::debug!(cached = result.cached, entries = result.history.len(), "Synthesis recorded");

        let entry = result.entry;

        Ok(Json(SynthesizeResponse {
            audio_url: entry.audio_url,
            message: entry
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_STATUS_MESSAGE.to_string()),
            tailuo: entry.tailuo.unwrap_or_default(),
            ipa: entry.ipa.unwrap_or_default(),
            cached: result.cached,
            history: HistoryView::newest_selected(&result.history),
        }))
    }

    /// GET /api/tts/models - Models the form may offer
    pub async fn list_models(State(controller): State<Arc<TtsController>>) -> Json<ModelsResponse> {
        Json(ModelsResponse {
            models: controller.tts_service.models().to_vec(),
            default: controller.tts_service.default_model().to_string(),
        })
    }
}

use super::dto::UpstreamTtsResponse;
use super::error::TtsServiceError;
use crate::domain::history::{HistoryEntry, HistoryLog, HistoryStore, NewHistoryEntry};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TtsSynthesisResult {
    /// The record just appended, always at index 0 of `history`
    pub entry: HistoryEntry,
    pub history: HistoryLog,
    pub cached: bool,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    history: Arc<HistoryStore>,
    models: Vec<String>,
    cache: Option<Cache<(String, String), UpstreamTtsResponse>>,
}

impl TtsService {
    /// `models` must not be empty; its first element is the default model
    pub fn new(
        tts_repo: Arc<dyn TtsRepository>,
        history: Arc<HistoryStore>,
        models: Vec<String>,
        cache_enabled: bool,
    ) -> Self {
        let cache = if cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(100)
                    .time_to_idle(Duration::from_secs(30 * 60))
                    .build(),
            )
        } else {
            None
        };

        Self {
            tts_repo,
            history,
            models,
            cache,
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn default_model(&self) -> &str {
        self.models.first().map(String::as_str).unwrap_or_default()
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize `text` and record the result in the history log
    ///
    /// This operation:
    /// - Rejects blank text and unknown models
    /// - Calls the upstream TTS service (or the cache)
    /// - Rejects responses without an audio URL
    /// - Appends the result to the history log
    async fn synthesize(
        &self,
        text: String,
        model: Option<String>,
    ) -> Result<TtsSynthesisResult, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        text: String,
        model: Option<String>,
    ) -> Result<TtsSynthesisResult, TtsServiceError> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(TtsServiceError::Invalid("Text cannot be empty".to_string()));
        }

        let model = self.resolve_model(model)?;

        tracing::info!(
            model = %model,
            text_length = text.chars().count(),
            "TTS synthesis request"
        );

        let (response, cached) = self.fetch(&text, &model).await?;

        let audio_url = response
            .resolved_audio_url()
            .ok_or_else(|| {
                TtsServiceError::Dependency(
                    "TTS API response is missing the audio URL (audio_url)".to_string(),
                )
            })?
            .to_string();

        let entry = NewHistoryEntry::new(text, model, audio_url)
            .with_message(response.message)
            .with_tailuo(response.tailuo)
            .with_ipa(response.ipa);

        let history = self.history.append(entry).await?;
        let entry = history
            .newest()
            .cloned()
            .ok_or_else(|| TtsServiceError::Dependency("History log is empty after append".to_string()))?;

        Ok(TtsSynthesisResult {
            entry,
            history,
            cached,
        })
    }
}

impl TtsService {
    fn resolve_model(&self, model: Option<String>) -> Result<String, TtsServiceError> {
        match model.map(|m| m.trim().to_string()).filter(|m| !m.is_empty()) {
            None => Ok(self.default_model().to_string()),
            Some(m) if self.models.contains(&m) => Ok(m),
            Some(m) => Err(TtsServiceError::Invalid(format!(
                "Unknown model '{}'. Available models: {}",
                m,
                self.models.join(", ")
            ))),
        }
    }

    async fn fetch(
        &self,
        text: &str,
        model: &str,
    ) -> Result<(UpstreamTtsResponse, bool), TtsServiceError> {
        let key = (model.to_string(), text.to_string());

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&key).await {
                tracing::info!(model = %model, "TTS cache hit - skipping upstream call");
                return Ok((cached, true));
            }
        }

        let response = self
            .tts_repo
            .synthesize(text, model)
            .await
            .map_err(TtsServiceError::Dependency)?;

        if let Some(cache) = &self.cache {
            if response.resolved_audio_url().is_some() {
                cache.insert(key, response.clone()).await;
            }
        }

        Ok((response, false))
    }
}

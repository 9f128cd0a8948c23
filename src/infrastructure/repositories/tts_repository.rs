use crate::domain::tts::UpstreamTtsResponse;
use async_trait::async_trait;

/// Repository for the upstream TTS service.
///
/// Implementations send `{text, model}` and hand back the decoded response
/// untouched; resolving and validating the audio URL is the caller's job.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` with `model`
    ///
    /// # Errors
    /// Returns a human-readable message if the call fails, the service
    /// answers with a non-success status, or the body is not JSON
    async fn synthesize(&self, text: &str, model: &str) -> Result<UpstreamTtsResponse, String>;
}

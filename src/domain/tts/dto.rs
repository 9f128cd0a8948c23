use crate::domain::history::HistoryView;
use serde::{Deserialize, Serialize};

/// Request for POST /api/tts/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Payload sent to the upstream TTS service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamTtsRequest {
    pub text: String,
    pub model: String,
}

/// Payload returned by the upstream TTS service.
///
/// Older deployments return `audio_url`, newer ones `converted_audio_url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpstreamTtsResponse {
    #[serde(default)]
    pub converted_audio_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tailuo: Option<String>,
    #[serde(default)]
    pub ipa: Option<String>,
}

impl UpstreamTtsResponse {
    /// First non-empty audio URL, preferring `converted_audio_url`
    pub fn resolved_audio_url(&self) -> Option<&str> {
        [&self.converted_audio_url, &self.audio_url]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .find(|url| !url.trim().is_empty())
    }
}

/// Response for POST /api/tts/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeResponse {
    pub audio_url: String,
    pub message: String,
    pub tailuo: String,
    pub ipa: String,
    /// True when the audio came from the response cache instead of the upstream service
    pub cached: bool,
    pub history: HistoryView,
}

/// Response for GET /api/tts/models
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
    pub default: String,
}

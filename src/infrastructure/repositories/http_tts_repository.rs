use super::tts_repository::TtsRepository;
use crate::domain::tts::{UpstreamTtsRequest, UpstreamTtsResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN};
use std::time::Duration;

/// Characters of an error body kept in the error message
const MAX_ERROR_DETAIL: usize = 300;

/// Upstream TTS service reached over HTTP
pub struct HttpTtsRepository {
    api_url: String,
    http_client: reqwest::Client,
}

impl HttpTtsRepository {
    pub fn new(api_url: String, origin: &str, timeout: Duration) -> Result<Self, String> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ORIGIN,
            HeaderValue::from_str(origin).map_err(|e| format!("Invalid TTS origin header: {}", e))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build TTS HTTP client: {}", e))?;

        Ok(Self {
            api_url,
            http_client,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl TtsRepository for HttpTtsRepository {
    async fn synthesize(&self, text: &str, model: &str) -> Result<UpstreamTtsResponse, String> {
        tracing::info!(
            model = model,
            text_length = text.chars().count(),
            api_url = %self.api_url,
            "Calling upstream TTS API"
        );

        let payload = UpstreamTtsRequest {
            text: text.to_string(),
            model: model.to_string(),
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("TTS API connection failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail: String = response
                .text()
                .await
                .unwrap_or_else(|e| e.to_string())
                .chars()
                .take(MAX_ERROR_DETAIL)
                .collect();
            return Err(format!(
                "TTS API call failed (HTTP {}): {}",
                status.as_u16(),
                detail
            ));
        }

        response
            .json::<UpstreamTtsResponse>()
            .await
            .map_err(|_| "TTS API returned a non-JSON response".to_string())
    }
}

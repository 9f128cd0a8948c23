use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TTS_API_URL: &str = "https://learn-language.tokyo/taigiTTS/taigi-text-to-speech";
pub const DEFAULT_TTS_API_ORIGIN: &str = "https://learn-language.tokyo";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Upstream TTS
    pub tts_api_url: String,
    pub tts_api_origin: String,
    pub tts_timeout_secs: u64,
    pub tts_models: Vec<String>,
    pub tts_cache_enabled: bool,
    // History
    pub history_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            tts_api_url: env::var("TTS_API_URL").unwrap_or_else(|_| DEFAULT_TTS_API_URL.to_string()),
            tts_api_origin: env::var("TTS_API_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_TTS_API_ORIGIN.to_string()),
            tts_timeout_secs: env::var("TTS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()?,
            tts_models: parse_models(&env::var("TTS_MODELS").unwrap_or_default()),
            tts_cache_enabled: env::var("TTS_CACHE_ENABLED")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
            history_path: env::var("HISTORY_PATH")
                .unwrap_or_else(|_| "data/history.json".to_string())
                .into(),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn tts_timeout(&self) -> Duration {
        Duration::from_secs(self.tts_timeout_secs)
    }
}

/// Comma-separated model list; falls back to `model6` when empty
fn parse_models(raw: &str) -> Vec<String> {
    let models: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();

    if models.is_empty() {
        vec!["model6".to_string()]
    } else {
        models
    }
}

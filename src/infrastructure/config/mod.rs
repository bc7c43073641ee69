use serde::Deserialize;
use std::env;

/// The endpoint gTTS-style clients use for unauthenticated synthesis
const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com/translate_tts";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub tts_endpoint: String,
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Every setting has a default so the binary works with no environment.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            tts_endpoint: env::var("TTS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_TTS_ENDPOINT.to_string()),
            request_timeout_secs: env::var("TTS_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }
}

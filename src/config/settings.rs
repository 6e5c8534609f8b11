use std::str::FromStr;

use serde::Deserialize;

pub const DEFAULT_WHISPER_ENDPOINT: &str =
    "https://router.huggingface.co/hf-inference/models/openai/whisper-large-v3";
pub const DEFAULT_TRANSLATION_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

const DEFAULT_TRANSCRIPTION_TIMEOUT_SECS: u64 = 120;
const DEFAULT_TRANSLATION_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub transcription: TranscriptionSettings,
    pub translation: TranslationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub endpoint: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationSettings {
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("HUGGINGFACE_API_KEY is missing; add it to the environment or a .env file")]
    MissingApiKey,
}

impl Settings {
    /// Builds settings from environment variables, with working defaults for
    /// everything except the speech API credential.
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key =
            std::env::var("HUGGINGFACE_API_KEY").map_err(|_| SettingsError::MissingApiKey)?;

        Ok(Self {
            transcription: TranscriptionSettings {
                endpoint: env_or("WHISPER_API_URL", DEFAULT_WHISPER_ENDPOINT),
                api_key,
                timeout_secs: env_parse_or(
                    "TRANSCRIPTION_TIMEOUT_SECS",
                    DEFAULT_TRANSCRIPTION_TIMEOUT_SECS,
                ),
            },
            translation: TranslationSettings {
                endpoint: env_or("TRANSLATION_API_URL", DEFAULT_TRANSLATION_ENDPOINT),
                timeout_secs: env_parse_or(
                    "TRANSLATION_TIMEOUT_SECS",
                    DEFAULT_TRANSLATION_TIMEOUT_SECS,
                ),
            },
            logging: LoggingSettings {
                level: env_or("LOG_LEVEL", "debug"),
                json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

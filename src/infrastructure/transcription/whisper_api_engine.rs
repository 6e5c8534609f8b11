use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioPayload;

/// Remote speech-recognition adapter for HuggingFace-router-style Whisper
/// endpoints: raw audio bytes in, JSON transcript out.
pub struct WhisperApiEngine {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl WhisperApiEngine {
    pub fn new(endpoint: &str, api_key: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct WhisperResponse {
    text: Option<String>,
    error: Option<String>,
}

#[async_trait]
impl TranscriptionEngine for WhisperApiEngine {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            content_type = audio.format.as_mime(),
            bytes = audio.data.len(),
            "Sending audio to speech API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, audio.format.as_mime())
            .header(ACCEPT, "application/json")
            .body(audio.data.clone())
            .send()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranscriptionError::RequestFailed(format!("body: {}", e)))?;

        // A cold model answers with a "loading" notice instead of a transcript.
        if !status.is_success() {
            if body.contains("loading") {
                return Err(TranscriptionError::ModelLoading);
            }
            return Err(TranscriptionError::RequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: WhisperResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if body.contains("loading") => return Err(TranscriptionError::ModelLoading),
            Err(e) => {
                return Err(TranscriptionError::RequestFailed(format!(
                    "parse response: {}",
                    e
                )));
            }
        };

        if let Some(error) = parsed.error {
            if error.contains("loading") {
                return Err(TranscriptionError::ModelLoading);
            }
            return Err(TranscriptionError::Provider(error));
        }

        let text = parsed.text.unwrap_or_default().trim().to_lowercase();
        if text.is_empty() {
            return Err(TranscriptionError::EmptyTranscript);
        }

        tracing::info!(chars = text.len(), "Transcription completed");

        Ok(text)
    }
}

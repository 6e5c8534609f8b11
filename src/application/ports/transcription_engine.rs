use async_trait::async_trait;

use crate::domain::AudioPayload;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("speech model is still loading")]
    ModelLoading,
    #[error("speech provider error: {0}")]
    Provider(String),
    #[error("transcription request failed: {0}")]
    RequestFailed(String),
    #[error("transcription came back empty")]
    EmptyTranscript,
}

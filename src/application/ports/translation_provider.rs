use async_trait::async_trait;

use crate::domain::LanguageCode;

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    RequestFailed(String),
    #[error("malformed translation response: {0}")]
    MalformedResponse(String),
    #[error("provider returned an empty translation")]
    EmptyTranslation,
}

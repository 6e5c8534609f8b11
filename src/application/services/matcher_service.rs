use std::sync::Arc;

use super::variant_generator::VariantGenerator;
use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::{AudioPayload, Keyword, MatchOutcome};

/// Transfer cap for a single audio payload.
pub const MAX_AUDIO_BYTES: usize = 50 * 1024 * 1024;

/// Orchestrates transcription and variant generation, then searches the
/// transcript for the first matching variant.
pub struct MatcherService {
    engine: Arc<dyn TranscriptionEngine>,
    variants: Arc<VariantGenerator>,
    max_audio_bytes: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("keyword is missing or empty")]
    EmptyKeyword,
    #[error("audio payload is empty")]
    EmptyAudio,
    #[error("audio payload of {size} bytes exceeds the {limit}-byte limit")]
    AudioTooLarge { size: usize, limit: usize },
    #[error("transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),
}

impl MatcherService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>, variants: Arc<VariantGenerator>) -> Self {
        Self::with_audio_limit(engine, variants, MAX_AUDIO_BYTES)
    }

    pub fn with_audio_limit(
        engine: Arc<dyn TranscriptionEngine>,
        variants: Arc<VariantGenerator>,
        max_audio_bytes: usize,
    ) -> Self {
        Self {
            engine,
            variants,
            max_audio_bytes,
        }
    }

    /// Transcription and variant generation are independent, so both are
    /// issued concurrently. A transcription failure fails the whole match;
    /// there is no partial result against an empty transcript.
    #[tracing::instrument(skip(self, audio), fields(bytes = audio.data.len(), format = ?audio.format))]
    pub async fn find_keyword(
        &self,
        audio: &AudioPayload,
        raw_keyword: &str,
    ) -> Result<MatchOutcome, MatchError> {
        let keyword = Keyword::parse(raw_keyword).map_err(|_| MatchError::EmptyKeyword)?;
        if audio.data.is_empty() {
            return Err(MatchError::EmptyAudio);
        }
        if audio.data.len() > self.max_audio_bytes {
            return Err(MatchError::AudioTooLarge {
                size: audio.data.len(),
                limit: self.max_audio_bytes,
            });
        }

        let (transcription, variants) = tokio::join!(
            self.engine.transcribe(audio),
            self.variants.generate(&keyword),
        );
        let transcription = transcription?;

        // First match in generation order wins, not the longest match.
        let hit = variants.set.find_in(&transcription).map(str::to_string);

        let outcome = match hit {
            Some(matched) => {
                tracing::info!(matched = %matched, "Keyword found in transcription");
                MatchOutcome::found(transcription, matched, variants.set.into_vec())
            }
            None => {
                tracing::info!("No keyword variant found in transcription");
                MatchOutcome::not_found(transcription, variants.set.into_vec())
            }
        };

        Ok(outcome)
    }
}

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::ports::{LanguageDetector, TranslationProvider};
use crate::domain::{Keyword, LanguageCode, TranslationOrigin, TranslationOutcome};

/// Translates a keyword into one target language, degrading to the identity
/// keyword on any failure. A translation outage must not block keyword
/// matching, so this service never returns an error.
pub struct TranslationService {
    detector: Arc<dyn LanguageDetector>,
    provider: Arc<dyn TranslationProvider>,
    warned_invalid_lang: AtomicBool,
}

impl TranslationService {
    pub fn new(detector: Arc<dyn LanguageDetector>, provider: Arc<dyn TranslationProvider>) -> Self {
        Self {
            detector,
            provider,
            warned_invalid_lang: AtomicBool::new(false),
        }
    }

    pub async fn translate(&self, keyword: &Keyword, target: &LanguageCode) -> TranslationOutcome {
        let detected = self.detector.detect(keyword.as_str()).await;

        let source = match LanguageCode::parse(&detected) {
            Ok(code) => code,
            Err(_) => {
                // Warn once per service instance, not once per fan-out call.
                if !self.warned_invalid_lang.swap(true, Ordering::Relaxed) {
                    tracing::warn!(
                        detected = %detected,
                        "Detector returned an invalid language code, keeping keyword as-is"
                    );
                }
                return self.identity(keyword, target, TranslationOrigin::Fallback);
            }
        };

        if source == *target {
            return self.identity(keyword, target, TranslationOrigin::SameLanguage);
        }

        match self
            .provider
            .translate(keyword.as_str(), &source, target)
            .await
        {
            Ok(text) => TranslationOutcome {
                language: target.clone(),
                text: text.to_lowercase(),
                origin: TranslationOrigin::Provider,
            },
            Err(err) => {
                tracing::warn!(
                    target_language = %target,
                    error = %err,
                    "Translation failed, falling back to the original keyword"
                );
                self.identity(keyword, target, TranslationOrigin::Fallback)
            }
        }
    }

    fn identity(
        &self,
        keyword: &Keyword,
        target: &LanguageCode,
        origin: TranslationOrigin,
    ) -> TranslationOutcome {
        TranslationOutcome {
            language: target.clone(),
            text: keyword.as_str().to_string(),
            origin,
        }
    }
}

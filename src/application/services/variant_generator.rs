use futures::future::join_all;

use super::translation_service::TranslationService;
use crate::domain::{Keyword, KeywordVariantSet, LanguageCode, TranslationOutcome};

/// The language list the original keyword is fanned out to, in output order.
const TARGET_LANGUAGES: [&str; 25] = [
    "es", "fr", "ta", "de", "it", "pt", "ru", "zh", "ar", "ja", "ko", "hi", "bn", "mr", "pl", "tr",
    "nl", "sv", "fi", "cs", "no", "da", "ro", "el", "he",
];

/// Phrases the translation provider is known to emit instead of a real
/// translation. Never admitted as search keywords.
const DENYLIST: [&str; 4] = [
    "please select two distinct languages",
    "please select two different languages",
    "select two distinct languages",
    "select two different languages",
];

/// Immutable fan-out configuration, fixed at construction time.
#[derive(Debug, Clone)]
pub struct VariantConfig {
    pub target_languages: Vec<LanguageCode>,
    pub denylist: Vec<String>,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            target_languages: TARGET_LANGUAGES
                .iter()
                .map(|code| LanguageCode::parse(code).expect("static language codes are valid"))
                .collect(),
            denylist: DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The variant set plus the raw per-language outcomes, so callers can tell
/// how many languages actually translated versus fell back.
#[derive(Debug, Clone)]
pub struct KeywordVariants {
    pub set: KeywordVariantSet,
    pub outcomes: Vec<TranslationOutcome>,
}

/// Fans the translator out over the configured target languages and folds
/// the results into a deduplicated variant set.
pub struct VariantGenerator {
    translator: TranslationService,
    config: VariantConfig,
}

impl VariantGenerator {
    pub fn new(translator: TranslationService, config: VariantConfig) -> Self {
        Self { translator, config }
    }

    /// All per-language calls run concurrently; output order stays
    /// original-first, then target-list order.
    pub async fn generate(&self, keyword: &Keyword) -> KeywordVariants {
        let calls = self
            .config
            .target_languages
            .iter()
            .map(|lang| self.translator.translate(keyword, lang));

        let outcomes = join_all(calls).await;

        let mut set = KeywordVariantSet::new(keyword);
        for outcome in &outcomes {
            if self.is_denylisted(&outcome.text) {
                tracing::debug!(
                    language = %outcome.language,
                    "Dropping denylisted provider phrase"
                );
                continue;
            }
            set.insert(&outcome.text);
        }

        tracing::debug!(
            keyword = %keyword,
            variants = set.len(),
            "Generated keyword variants"
        );

        KeywordVariants { set, outcomes }
    }

    fn is_denylisted(&self, text: &str) -> bool {
        let folded = text.trim().to_lowercase();
        self.config.denylist.iter().any(|d| *d == folded)
    }
}

mod matcher_service;
mod translation_service;
mod variant_generator;

pub use matcher_service::{MAX_AUDIO_BYTES, MatchError, MatcherService};
pub use translation_service::TranslationService;
pub use variant_generator::{KeywordVariants, VariantConfig, VariantGenerator};

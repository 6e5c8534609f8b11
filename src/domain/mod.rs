mod audio;
mod keyword;
mod language;
mod match_outcome;
mod variants;

pub use audio::{AudioFormat, AudioPayload};
pub use keyword::{Keyword, KeywordError};
pub use language::{InvalidLanguageCode, LanguageCode};
pub use match_outcome::MatchOutcome;
pub use variants::{KeywordVariantSet, TranslationOrigin, TranslationOutcome};

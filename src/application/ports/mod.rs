mod language_detector;
mod transcription_engine;
mod translation_provider;

pub use language_detector::LanguageDetector;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translation_provider::{TranslationError, TranslationProvider};

mod settings;

pub use settings::{
    DEFAULT_TRANSLATION_ENDPOINT, DEFAULT_WHISPER_ENDPOINT, LoggingSettings, Settings,
    SettingsError, TranscriptionSettings, TranslationSettings,
};

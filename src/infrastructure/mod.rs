pub mod observability;
pub mod transcription;
pub mod translation;

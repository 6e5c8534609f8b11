use std::sync::Arc;
use std::time::Duration;

use keyspot::application::services::{
    MatcherService, TranslationService, VariantConfig, VariantGenerator,
};
use keyspot::config::Settings;
use keyspot::domain::AudioPayload;
use keyspot::infrastructure::observability::init_tracing;
use keyspot::infrastructure::transcription::WhisperApiEngine;
use keyspot::infrastructure::translation::{MyMemoryClient, ScriptRangeDetector};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (audio_path, raw_keyword) = match (args.next(), args.next()) {
        (Some(path), Some(keyword)) => (path, keyword),
        _ => {
            eprintln!("usage: keyspot <audio-file> <keyword>");
            std::process::exit(2);
        }
    };

    let settings = Settings::from_env()?;
    init_tracing(&settings.logging);

    let engine = Arc::new(WhisperApiEngine::new(
        &settings.transcription.endpoint,
        &settings.transcription.api_key,
        Duration::from_secs(settings.transcription.timeout_secs),
    ));
    let detector = Arc::new(ScriptRangeDetector);
    let provider = Arc::new(MyMemoryClient::new(
        &settings.translation.endpoint,
        Duration::from_secs(settings.translation.timeout_secs),
    ));
    let translator = TranslationService::new(detector, provider);
    let variants = Arc::new(VariantGenerator::new(translator, VariantConfig::default()));
    let matcher = MatcherService::new(engine, variants);

    let data = std::fs::read(&audio_path)?;
    let payload = AudioPayload::from_upload(&audio_path, data);

    let outcome = matcher.find_keyword(&payload, &raw_keyword).await?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}

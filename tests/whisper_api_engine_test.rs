use std::time::Duration;

use axum::Router;
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use keyspot::application::ports::{TranscriptionEngine, TranscriptionError};
use keyspot::domain::AudioPayload;
use keyspot::infrastructure::transcription::WhisperApiEngine;

async fn start_mock_speech_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn engine_for(base_url: &str) -> WhisperApiEngine {
    WhisperApiEngine::new(base_url, "test-key", Duration::from_secs(5))
}

fn payload() -> AudioPayload {
    AudioPayload::from_upload("clip.wav", b"fake audio bytes".to_vec())
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_folded_text() {
    let response_body = r#"{"text": "  Say Hello World  "}"#;
    let (base_url, shutdown_tx) = start_mock_speech_server(200, response_body).await;

    let result = engine_for(&base_url).transcribe(&payload()).await;

    assert_eq!(result.unwrap(), "say hello world");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_transcribing_then_returns_request_failed() {
    let response_body = r#"{"error": "bad audio"}"#;
    let (base_url, shutdown_tx) = start_mock_speech_server(400, response_body).await;

    let result = engine_for(&base_url).transcribe(&payload()).await;

    assert!(matches!(result, Err(TranscriptionError::RequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_loading_notice_in_error_status_when_transcribing_then_returns_model_loading() {
    let response_body = r#"{"error": "Model openai/whisper-large-v3 is currently loading", "estimated_time": 20.0}"#;
    let (base_url, shutdown_tx) = start_mock_speech_server(503, response_body).await;

    let result = engine_for(&base_url).transcribe(&payload()).await;

    assert!(matches!(result, Err(TranscriptionError::ModelLoading)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_plain_loading_string_body_when_transcribing_then_returns_model_loading() {
    let response_body = "Model is currently loading, try again later";
    let (base_url, shutdown_tx) = start_mock_speech_server(200, response_body).await;

    let result = engine_for(&base_url).transcribe(&payload()).await;

    assert!(matches!(result, Err(TranscriptionError::ModelLoading)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_field_when_transcribing_then_returns_provider_error() {
    let response_body = r#"{"error": "internal failure"}"#;
    let (base_url, shutdown_tx) = start_mock_speech_server(200, response_body).await;

    let result = engine_for(&base_url).transcribe(&payload()).await;

    assert!(matches!(result, Err(TranscriptionError::Provider(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_whitespace_only_text_when_transcribing_then_returns_empty_transcript() {
    let response_body = r#"{"text": "   "}"#;
    let (base_url, shutdown_tx) = start_mock_speech_server(200, response_body).await;

    let result = engine_for(&base_url).transcribe(&payload()).await;

    assert!(matches!(result, Err(TranscriptionError::EmptyTranscript)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_text_field_when_transcribing_then_returns_empty_transcript() {
    let response_body = r#"{}"#;
    let (base_url, shutdown_tx) = start_mock_speech_server(200, response_body).await;

    let result = engine_for(&base_url).transcribe(&payload()).await;

    assert!(matches!(result, Err(TranscriptionError::EmptyTranscript)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_endpoint_when_transcribing_then_returns_request_failed() {
    // Bind and immediately drop a listener so the port refuses connections.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let engine = engine_for(&format!("http://{}", addr));
    let result = engine.transcribe(&payload()).await;

    assert!(matches!(result, Err(TranscriptionError::RequestFailed(_))));
}

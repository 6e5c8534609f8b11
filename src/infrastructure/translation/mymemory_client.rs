use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{TranslationError, TranslationProvider};
use crate::domain::LanguageCode;

/// Remote translation adapter for the MyMemory-style GET API:
/// `?q=<text>&langpair=<source>|<target>`.
pub struct MyMemoryClient {
    client: Client,
    endpoint: String,
}

impl MyMemoryClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[async_trait]
impl TranslationProvider for MyMemoryClient {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageCode,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        let langpair = format!("{}|{}", source, target);

        tracing::debug!(%langpair, "Requesting translation");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| TranslationError::RequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslationError::RequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::MalformedResponse(e.to_string()))?;

        let translated = parsed.response_data.translated_text.unwrap_or_default();
        if translated.trim().is_empty() {
            return Err(TranslationError::EmptyTranslation);
        }

        Ok(translated)
    }
}

use async_trait::async_trait;

/// Best-effort source-language detection.
///
/// Implementations never fail; ambiguous or empty input maps to `"en"`.
/// The returned code is raw detector output and may be malformed, so
/// callers validate it before use.
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    async fn detect(&self, text: &str) -> String;
}

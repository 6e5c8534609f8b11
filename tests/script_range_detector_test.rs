use keyspot::application::ports::LanguageDetector;
use keyspot::infrastructure::translation::ScriptRangeDetector;

async fn detect(text: &str) -> String {
    ScriptRangeDetector.detect(text).await
}

#[tokio::test]
async fn given_latin_text_when_detecting_then_returns_english() {
    assert_eq!(detect("hello world").await, "en");
}

#[tokio::test]
async fn given_kana_text_when_detecting_then_returns_japanese() {
    assert_eq!(detect("こんにちは").await, "ja");
}

#[tokio::test]
async fn given_kanji_with_kana_when_detecting_then_kana_breaks_the_tie() {
    assert_eq!(detect("世界こんにちは").await, "ja");
}

#[tokio::test]
async fn given_hangul_text_when_detecting_then_returns_korean() {
    assert_eq!(detect("안녕하세요").await, "ko");
}

#[tokio::test]
async fn given_cjk_only_text_when_detecting_then_returns_chinese() {
    assert_eq!(detect("你好").await, "zh");
}

#[tokio::test]
async fn given_cyrillic_text_when_detecting_then_returns_russian() {
    assert_eq!(detect("привет").await, "ru");
}

#[tokio::test]
async fn given_arabic_text_when_detecting_then_returns_arabic() {
    assert_eq!(detect("مرحبا").await, "ar");
}

#[tokio::test]
async fn given_devanagari_text_when_detecting_then_returns_hindi() {
    assert_eq!(detect("नमस्ते").await, "hi");
}

#[tokio::test]
async fn given_greek_text_when_detecting_then_returns_greek() {
    assert_eq!(detect("γεια σου").await, "el");
}

#[tokio::test]
async fn given_hebrew_text_when_detecting_then_returns_hebrew() {
    assert_eq!(detect("שלום").await, "he");
}

#[tokio::test]
async fn given_no_letters_when_detecting_then_falls_back_to_english() {
    assert_eq!(detect("1234 !?").await, "en");
    assert_eq!(detect("").await, "en");
}

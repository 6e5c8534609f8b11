use async_trait::async_trait;

use crate::application::ports::LanguageDetector;

const FALLBACK_LANGUAGE: &str = "en";

/// Offline language detection from the dominant character script.
///
/// Good enough for single keywords: scripts map one-to-one onto the
/// languages the fan-out cares about, and Latin text defaults to English.
pub struct ScriptRangeDetector;

#[async_trait]
impl LanguageDetector for ScriptRangeDetector {
    async fn detect(&self, text: &str) -> String {
        dominant_script_language(text).to_string()
    }
}

fn dominant_script_language(text: &str) -> &'static str {
    let mut latin = 0usize;
    let mut cyrillic = 0usize;
    let mut arabic = 0usize;
    let mut devanagari = 0usize;
    let mut greek = 0usize;
    let mut hebrew = 0usize;
    let mut hiragana_katakana = 0usize;
    let mut hangul = 0usize;
    let mut cjk = 0usize;

    for c in text.chars() {
        match c {
            'A'..='Z' | 'a'..='z' => latin += 1,
            '\u{0400}'..='\u{04FF}' => cyrillic += 1,
            '\u{0600}'..='\u{06FF}' => arabic += 1,
            '\u{0900}'..='\u{097F}' => devanagari += 1,
            '\u{0370}'..='\u{03FF}' => greek += 1,
            '\u{0590}'..='\u{05FF}' => hebrew += 1,
            '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' => hiragana_katakana += 1,
            '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}' => hangul += 1,
            // Kanji lands here too; hiragana/katakana counts break the tie
            // for Japanese text.
            '\u{4E00}'..='\u{9FFF}' => cjk += 1,
            _ => {}
        }
    }

    let counts = [
        (hiragana_katakana, "ja"),
        (hangul, "ko"),
        (cjk, "zh"),
        (devanagari, "hi"),
        (greek, "el"),
        (hebrew, "he"),
        (cyrillic, "ru"),
        (arabic, "ar"),
        (latin, "en"),
    ];

    counts
        .iter()
        .filter(|(count, _)| *count > 0)
        .max_by_key(|(count, _)| *count)
        .map(|(_, lang)| *lang)
        .unwrap_or(FALLBACK_LANGUAGE)
}

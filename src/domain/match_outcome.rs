use serde::Serialize;

/// Result of one keyword-match attempt, serialized in the exact wire shape
/// consuming clients key off: `transcription`, `result`, `matchedKeyword`,
/// `searchedKeywords`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub transcription: String,
    #[serde(rename = "result")]
    pub matched: bool,
    pub matched_keyword: Option<String>,
    pub searched_keywords: Vec<String>,
}

impl MatchOutcome {
    pub fn found(transcription: String, keyword: String, searched: Vec<String>) -> Self {
        Self {
            transcription,
            matched: true,
            matched_keyword: Some(keyword),
            searched_keywords: searched,
        }
    }

    pub fn not_found(transcription: String, searched: Vec<String>) -> Self {
        Self {
            transcription,
            matched: false,
            matched_keyword: None,
            searched_keywords: searched,
        }
    }
}

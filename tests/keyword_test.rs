use keyspot::domain::{Keyword, KeywordError};

#[test]
fn given_mixed_case_input_when_parsing_then_keyword_is_lower_cased() {
    let keyword = Keyword::parse("  Hello World  ").unwrap();
    assert_eq!(keyword.as_str(), "hello world");
}

#[test]
fn given_empty_input_when_parsing_then_returns_empty_error() {
    assert!(matches!(Keyword::parse(""), Err(KeywordError::Empty)));
}

#[test]
fn given_whitespace_only_input_when_parsing_then_returns_empty_error() {
    assert!(matches!(Keyword::parse("   \t "), Err(KeywordError::Empty)));
}

#[test]
fn given_non_ascii_input_when_parsing_then_case_folding_is_unicode_aware() {
    let keyword = Keyword::parse("HÉLLO").unwrap();
    assert_eq!(keyword.as_str(), "héllo");
}

use std::fmt;

/// A two-letter language code with an optional two-letter region suffix,
/// e.g. `es` or `zh-tw`. Input is lower-cased before validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

#[derive(Debug, thiserror::Error)]
#[error("invalid language code: {0:?}")]
pub struct InvalidLanguageCode(pub String);

impl LanguageCode {
    pub fn parse(raw: &str) -> Result<Self, InvalidLanguageCode> {
        let code = raw.trim().to_lowercase();
        if is_valid(&code) {
            Ok(Self(code))
        } else {
            Err(InvalidLanguageCode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid(code: &str) -> bool {
    let bytes = code.as_bytes();
    match bytes.len() {
        2 => bytes.iter().all(|b| b.is_ascii_lowercase()),
        5 => {
            bytes[2] == b'-'
                && bytes[..2].iter().all(|b| b.is_ascii_lowercase())
                && bytes[3..].iter().all(|b| b.is_ascii_lowercase())
        }
        _ => false,
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

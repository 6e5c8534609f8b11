use std::fmt;

/// A user-supplied search keyword.
///
/// Trimmed and lower-cased at construction; everything downstream relies on
/// the keyword already being in its folded form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

#[derive(Debug, thiserror::Error)]
pub enum KeywordError {
    #[error("keyword is empty")]
    Empty,
}

impl Keyword {
    pub fn parse(raw: &str) -> Result<Self, KeywordError> {
        let folded = raw.trim().to_lowercase();
        if folded.is_empty() {
            return Err(KeywordError::Empty);
        }
        Ok(Self(folded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

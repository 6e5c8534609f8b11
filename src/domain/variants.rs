use super::keyword::Keyword;
use super::language::LanguageCode;

/// How a per-language variant was produced. Lets callers tell a real
/// translation apart from an identity fallback, since fallbacks silently
/// reduce recall rather than surfacing as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationOrigin {
    /// The remote provider returned a translation.
    Provider,
    /// Source and target language matched; no call was made.
    SameLanguage,
    /// Detection or translation failed; the original keyword stands in.
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    pub language: LanguageCode,
    pub text: String,
    pub origin: TranslationOrigin,
}

/// Ordered set of distinct lower-cased keyword variants.
///
/// The original keyword is always element zero; later elements keep the
/// first-seen order of insertion. Uniqueness is exact string equality after
/// lower-casing, with no diacritic or whitespace normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordVariantSet {
    entries: Vec<String>,
}

impl KeywordVariantSet {
    pub fn new(original: &Keyword) -> Self {
        Self {
            entries: vec![original.as_str().to_string()],
        }
    }

    /// Adds a candidate variant unless it is blank or already present.
    pub fn insert(&mut self, candidate: &str) {
        let folded = candidate.to_lowercase();
        if folded.trim().is_empty() {
            return;
        }
        if self.entries.iter().any(|e| *e == folded) {
            return;
        }
        self.entries.push(folded);
    }

    /// First variant, in set order, contained in `haystack`. Both sides are
    /// already lower-cased, so this is a plain substring scan.
    pub fn find_in<'a>(&'a self, haystack: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|v| haystack.contains(v.as_str()))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }
}

//! Normalized symptom phrases.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SymptomaticError};

/// A normalized symptom phrase: lowercase, underscores turned into spaces,
/// trimmed, with internal whitespace collapsed to single spaces.
///
/// Two tokens are equal iff their normalized text is identical.
///
/// ```
/// use symptomatic::dataset::SymptomToken;
///
/// let token = SymptomToken::parse("  Continuous_Sneezing ").unwrap();
/// assert_eq!(token.as_str(), "continuous sneezing");
/// assert_eq!(SymptomToken::parse(token.as_str()), Some(token));
/// assert!(SymptomToken::parse(" _ ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymptomToken(String);

impl SymptomToken {
    /// Normalize raw text into a token; `None` when nothing remains.
    pub fn parse(raw: &str) -> Option<Self> {
        let replaced = raw.replace('_', " ").to_lowercase();
        let normalized = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            None
        } else {
            Some(SymptomToken(normalized))
        }
    }

    /// Wrap text that has already been through the symptom analyzer.
    pub(crate) fn from_normalized(text: String) -> Self {
        SymptomToken(text)
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The whitespace-separated words of the phrase.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ')
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}

impl fmt::Display for SymptomToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SymptomToken {
    type Error = SymptomaticError;

    fn try_from(raw: String) -> Result<Self> {
        SymptomToken::parse(&raw).ok_or_else(|| {
            SymptomaticError::invalid_argument(format!("{raw:?} is not a symptom"))
        })
    }
}

impl From<SymptomToken> for String {
    fn from(token: SymptomToken) -> Self {
        token.0
    }
}

impl AsRef<str> for SymptomToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Delimiter-based tokenizer.
//!
//! Splits text on a separator pattern and emits the text between separators,
//! so multi-word symptom phrases such as `"high fever"` stay intact.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SymptomaticError};

/// Separators between symptoms in free-text input: commas, semicolons, pipes
/// and line breaks.
pub const DEFAULT_DELIMITER_PATTERN: &str = r"[,;|\r\n]+";

/// A tokenizer that emits the gaps between delimiter matches.
#[derive(Clone, Debug)]
pub struct DelimiterTokenizer {
    /// The regex pattern matching delimiters
    pattern: Arc<Regex>,
}

impl DelimiterTokenizer {
    /// Create a new tokenizer with [`DEFAULT_DELIMITER_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_DELIMITER_PATTERN)
    }

    /// Create a tokenizer with a custom delimiter pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| SymptomaticError::analysis(format!("Invalid delimiter pattern: {e}")))?;

        Ok(DelimiterTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the delimiter pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for DelimiterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut last_end = 0;
        let mut position = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(Token::with_offsets(
                    &text[last_end..mat.start()],
                    position,
                    last_end,
                    mat.start(),
                ));
                position += 1;
            }
            last_end = mat.end();
        }

        if last_end < text.len() {
            tokens.push(Token::with_offsets(
                &text[last_end..],
                position,
                last_end,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "delimiter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &DelimiterTokenizer, input: &str) -> Vec<String> {
        tokenizer.tokenize(input).unwrap().map(|t| t.text).collect()
    }

    #[test]
    fn test_splits_on_commas_and_semicolons() {
        let tokenizer = DelimiterTokenizer::new().unwrap();
        assert_eq!(
            texts(&tokenizer, "chills, high fever;vomiting"),
            vec!["chills", " high fever", "vomiting"]
        );
    }

    #[test]
    fn test_consecutive_delimiters_produce_no_empty_tokens() {
        let tokenizer = DelimiterTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, ",,chills,,\n\nfatigue,"), vec!["chills", "fatigue"]);
    }

    #[test]
    fn test_offsets_point_into_original_text() {
        let tokenizer = DelimiterTokenizer::new().unwrap();
        let input = "cough,fatigue";
        let tokens: Vec<Token> = tokenizer.tokenize(input).unwrap().collect();
        assert_eq!(tokens[1].position, 1);
        assert_eq!(&input[tokens[1].start_offset..tokens[1].end_offset], "fatigue");
    }

    #[test]
    fn test_no_delimiter_yields_whole_text() {
        let tokenizer = DelimiterTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "chills fatigue"), vec!["chills fatigue"]);
        assert!(texts(&tokenizer, "").is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            DelimiterTokenizer::with_pattern("[unclosed"),
            Err(SymptomaticError::Analysis(_))
        ));
    }
}

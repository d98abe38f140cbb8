//! Token types for text analysis.
//!
//! A [`Token`] is a single unit of text flowing through the analysis pipeline.
//! Filters never drop tokens on their own; they mark them stopped and the
//! [`RemoveEmptyFilter`](crate::analysis::token_filter::remove_empty::RemoveEmptyFilter)
//! removes them at the end of the chain.
//!
//! ```
//! use symptomatic::analysis::token::Token;
//!
//! let token = Token::with_offsets("chills", 1, 7, 13);
//! assert_eq!(token.text, "chills");
//! assert_eq!(token.start_offset, 7);
//! assert!(!token.is_stopped());
//! ```

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            stopped: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            stopped: false,
        }
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Replace the text, keeping position and offsets.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

/// A stream of tokens, as produced by tokenizers and consumed by filters.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_stop_keeps_text() {
        let token = Token::new("fatigue", 2).stop();
        assert!(token.is_stopped());
        assert_eq!(token.text, "fatigue");
        assert_eq!(token.position, 2);
    }

    #[test]
    fn test_with_text_keeps_offsets() {
        let token = Token::with_offsets("Chills", 0, 3, 9).with_text("chills");
        assert_eq!(token.text, "chills");
        assert_eq!((token.start_offset, token.end_offset), (3, 9));
    }
}

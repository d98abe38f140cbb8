//! Tokenizers split raw text into an initial token stream.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that split text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod delimiter;

pub use delimiter::DelimiterTokenizer;

//! De-duplicating filter.

use std::collections::HashSet;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Keeps the first occurrence of each token text and drops the rest.
#[derive(Clone, Debug, Default)]
pub struct UniqueFilter;

impl UniqueFilter {
    /// Create a new unique filter.
    pub fn new() -> Self {
        UniqueFilter
    }
}

impl Filter for UniqueFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut seen = HashSet::new();
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.is_stopped() || seen.insert(token.text.clone()))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unique"
    }
}

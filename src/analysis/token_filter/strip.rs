//! Whitespace strip filter.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trims tokens and collapses internal whitespace runs to a single space.
///
/// Tokens that are blank after stripping are marked stopped.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    return token;
                }
                let collapsed = token.text.split_whitespace().collect::<Vec<_>>().join(" ");
                if collapsed.is_empty() {
                    token.stop()
                } else {
                    token.with_text(collapsed)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}

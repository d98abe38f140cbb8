//! Character replacement filter.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Replaces every occurrence of one character with another.
///
/// Symptom datasets often encode phrases as `skin_rash`; replacing `_` with a
/// space makes them comparable to typed input.
#[derive(Clone, Debug)]
pub struct ReplaceFilter {
    from: char,
    to: char,
}

impl ReplaceFilter {
    /// Create a filter replacing `from` with `to`.
    pub fn new(from: char, to: char) -> Self {
        ReplaceFilter { from, to }
    }

    /// The `_` → space replacement used for symptom names.
    pub fn underscores() -> Self {
        Self::new('_', ' ')
    }
}

impl Filter for ReplaceFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let (from, to) = (self.from, self.to);
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() || !token.text.contains(from) {
                    token
                } else {
                    let replaced = token.text.replace(from, &to.to_string());
                    token.with_text(replaced)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_replace_underscores() {
        let filter = ReplaceFilter::underscores();
        let tokens = vec![Token::new("skin_rash", 0), Token::new("chills", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "skin rash");
        assert_eq!(result[1].text, "chills");
    }
}

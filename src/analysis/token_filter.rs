//! Token filter implementations for token transformation.
//!
//! # Available Filters
//!
//! - [`replace::ReplaceFilter`] - Replaces characters (e.g. `_` with a space)
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`strip::StripFilter`] - Trims and collapses whitespace
//! - [`remove_empty::RemoveEmptyFilter`] - Removes stopped and empty tokens
//! - [`unique::UniqueFilter`] - Drops repeated tokens, keeping the first
//!
//! # Examples
//!
//! ```
//! use symptomatic::analysis::token_filter::Filter;
//! use symptomatic::analysis::token_filter::lowercase::LowercaseFilter;
//! use symptomatic::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Chills", 0), Token::new("FATIGUE", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "chills");
//! assert_eq!(filtered[1].text, "fatigue");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod remove_empty;
pub mod replace;
pub mod strip;
pub mod unique;

pub use lowercase::LowercaseFilter;
pub use remove_empty::RemoveEmptyFilter;
pub use replace::ReplaceFilter;
pub use strip::StripFilter;
pub use unique::UniqueFilter;

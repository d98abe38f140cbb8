//! Text analysis for symptom input.
//!
//! Raw text flows through a tokenizer and a chain of token filters, producing
//! normalized symptom phrases:
//!
//! ```text
//! "Skin_Rash, ITCHING ;  high   fever"
//!   → DelimiterTokenizer → ["Skin_Rash", " ITCHING ", "  high   fever"]
//!   → Replace(_ → ' ') → Lowercase → Strip → RemoveEmpty → Unique
//!   → ["skin rash", "itching", "high fever"]
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

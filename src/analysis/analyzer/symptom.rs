//! The analyzer used for every piece of symptom text, both dataset cells and
//! user queries, so the two sides always normalize identically.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    LowercaseFilter, RemoveEmptyFilter, ReplaceFilter, StripFilter, UniqueFilter,
};
use crate::analysis::tokenizer::DelimiterTokenizer;
use crate::dataset::SymptomToken;
use crate::error::Result;

/// Splits on list delimiters, then `_` → space, lowercase, trim/collapse
/// whitespace, drop empties and drop repeats.
#[derive(Clone, Debug)]
pub struct SymptomAnalyzer {
    inner: PipelineAnalyzer,
}

impl SymptomAnalyzer {
    /// Create the analyzer with the default delimiter set.
    pub fn new() -> Result<Self> {
        Self::with_tokenizer(DelimiterTokenizer::new()?)
    }

    /// Create the analyzer around a custom delimiter tokenizer.
    pub fn with_tokenizer(tokenizer: DelimiterTokenizer) -> Result<Self> {
        let inner = PipelineAnalyzer::new(Arc::new(tokenizer))
            .add_filter(Arc::new(ReplaceFilter::underscores()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .add_filter(Arc::new(UniqueFilter::new()));
        Ok(SymptomAnalyzer { inner })
    }

    /// Analyze `text` into distinct symptom tokens, in order of first appearance.
    pub fn symptoms(&self, text: &str) -> Result<Vec<SymptomToken>> {
        Ok(self
            .analyze(text)?
            .map(|token| SymptomToken::from_normalized(token.text))
            .collect())
    }
}

impl Analyzer for SymptomAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "symptom"
    }
}

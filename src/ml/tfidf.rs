//! TF-IDF vectorizer over whole symptom phrases.
//!
//! Each training example is one document and each symptom phrase is one term;
//! the words inside a phrase are never weighted on their own.

use std::collections::{BTreeMap, BTreeSet};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::dataset::{SymptomToken, TrainingExample};
use crate::error::{Result, SymptomaticError};
use crate::ml::FeatureVector;

/// Row normalization applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Scale to unit Euclidean length.
    L2,
    /// Scale so weights sum to 1.
    L1,
    /// Leave weights as they are.
    Off,
}

/// Options for [`TfIdfVectorizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfConfig {
    /// Use `ln((1 + n) / (1 + df)) + 1` instead of `ln(n / df) + 1`.
    pub smooth_idf: bool,
    /// Use `1 + ln(tf)` instead of the raw term count.
    pub sublinear_tf: bool,
    /// Row normalization.
    pub norm: Norm,
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            smooth_idf: true,
            sublinear_tf: false,
            norm: Norm::L2,
        }
    }
}

/// The frozen set of symptom phrases seen at training time.
///
/// Column indices follow lexicographic phrase order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<SymptomToken>,
    index: AHashMap<String, usize>,
    idf: Vec<f64>,
    max_phrase_words: usize,
}

impl Vocabulary {
    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Column index of a phrase.
    pub fn get(&self, phrase: &str) -> Option<usize> {
        self.index.get(phrase).copied()
    }

    /// Whether the phrase is a known term.
    pub fn contains(&self, phrase: &str) -> bool {
        self.index.contains_key(phrase)
    }

    /// Terms in column order.
    pub fn terms(&self) -> &[SymptomToken] {
        &self.terms
    }

    /// IDF weight per column.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Word count of the longest phrase.
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }
}

/// The outcome of resolving query tokens against the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMatch {
    /// Known phrases found in the query, sorted and distinct.
    pub matched: Vec<SymptomToken>,
    /// Query words that matched nothing, sorted and distinct.
    pub unmatched: Vec<String>,
}

/// TF-IDF vectorizer for symptom bags.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: Vocabulary,
    config: TfIdfConfig,
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// Fit the vocabulary and IDF weights on training examples.
    pub fn fit(examples: &[TrainingExample], config: TfIdfConfig) -> Result<Self> {
        if examples.is_empty() {
            return Err(SymptomaticError::invalid_argument(
                "cannot fit a vectorizer on zero examples",
            ));
        }

        let mut document_frequency: BTreeMap<&SymptomToken, usize> = BTreeMap::new();
        for example in examples {
            let unique: BTreeSet<&SymptomToken> = example.symptoms.iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = examples.len() as f64;
        let mut terms = Vec::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        let mut index = AHashMap::with_capacity(document_frequency.len());
        for (position, (term, df)) in document_frequency.into_iter().enumerate() {
            let df = df as f64;
            let weight = if config.smooth_idf {
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            } else {
                (n / df).ln() + 1.0
            };
            index.insert(term.as_str().to_string(), position);
            terms.push(term.clone());
            idf.push(weight);
        }
        let max_phrase_words = terms.iter().map(SymptomToken::word_count).max().unwrap_or(0);

        Ok(TfIdfVectorizer {
            vocabulary: Vocabulary {
                terms,
                index,
                idf,
                max_phrase_words,
            },
            config,
            n_documents: examples.len(),
        })
    }

    /// The frozen vocabulary.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of documents seen at fit time.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Weigh a training example's own symptom bag, counting repeats.
    pub fn transform_example(&self, example: &TrainingExample) -> FeatureVector {
        let mut counts = vec![0.0; self.vocabulary.len()];
        for symptom in &example.symptoms {
            if let Some(idx) = self.vocabulary.get(symptom.as_str()) {
                counts[idx] += 1.0;
            }
        }
        self.weigh(counts)
    }

    /// Vectorize query tokens. Unknown text contributes nothing; a query with
    /// no known symptom yields the zero vector.
    pub fn transform(&self, tokens: &[SymptomToken]) -> FeatureVector {
        let resolved = self.resolve(tokens);
        self.transform_matched(&resolved)
    }

    /// Vectorize an already resolved query.
    pub fn transform_matched(&self, resolved: &PhraseMatch) -> FeatureVector {
        let mut counts = vec![0.0; self.vocabulary.len()];
        for phrase in &resolved.matched {
            if let Some(idx) = self.vocabulary.get(phrase.as_str()) {
                counts[idx] = 1.0;
            }
        }
        self.weigh(counts)
    }

    /// Map query tokens onto vocabulary phrases.
    ///
    /// Token boundaries are ignored: the words of all tokens form one sequence
    /// that is scanned left to right, taking the longest known phrase at each
    /// position. So `"chills fatigue"` resolves like `"chills, fatigue"` and
    /// `"chills high, fever"` like `"chills, high fever"`. Words that start no
    /// known phrase are reported one by one in `unmatched`.
    pub fn resolve(&self, tokens: &[SymptomToken]) -> PhraseMatch {
        let words: Vec<&str> = tokens.iter().flat_map(|token| token.words()).collect();
        let mut matched = BTreeSet::new();
        let mut unmatched = BTreeSet::new();

        let mut i = 0;
        while i < words.len() {
            let longest = self.vocabulary.max_phrase_words().min(words.len() - i);
            let hit = (1..=longest).rev().find_map(|n| {
                let phrase = words[i..i + n].join(" ");
                self.vocabulary
                    .contains(&phrase)
                    .then(|| (n, SymptomToken::from_normalized(phrase)))
            });
            match hit {
                Some((n, phrase)) => {
                    matched.insert(phrase);
                    i += n;
                }
                None => {
                    unmatched.insert(words[i].to_string());
                    i += 1;
                }
            }
        }

        PhraseMatch {
            matched: matched.into_iter().collect(),
            unmatched: unmatched.into_iter().collect(),
        }
    }

    fn weigh(&self, mut counts: FeatureVector) -> FeatureVector {
        for (count, idf) in counts.iter_mut().zip(self.vocabulary.idf()) {
            if *count > 0.0 {
                let tf = if self.config.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    *count
                };
                *count = tf * idf;
            }
        }

        let norm = match self.config.norm {
            Norm::L2 => counts.iter().map(|x| x * x).sum::<f64>().sqrt(),
            Norm::L1 => counts.iter().map(|x| x.abs()).sum::<f64>(),
            Norm::Off => 1.0,
        };
        if norm > 0.0 && norm != 1.0 {
            for value in &mut counts {
                *value /= norm;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<SymptomToken> {
        raw.iter().filter_map(|s| SymptomToken::parse(s)).collect()
    }

    fn examples() -> Vec<TrainingExample> {
        vec![
            TrainingExample::new("Common Cold", tokens(&["continuous sneezing", "chills", "fatigue"])),
            TrainingExample::new("Malaria", tokens(&["chills", "vomiting", "high fever"])),
        ]
    }

    fn vectorizer() -> TfIdfVectorizer {
        TfIdfVectorizer::fit(&examples(), TfIdfConfig::default()).unwrap()
    }

    #[test]
    fn test_vocabulary_is_sorted_phrases() {
        let vectorizer = vectorizer();
        let terms: Vec<&str> = vectorizer.vocabulary().terms().iter().map(|t| t.as_str()).collect();
        assert_eq!(
            terms,
            vec!["chills", "continuous sneezing", "fatigue", "high fever", "vomiting"]
        );
        assert_eq!(vectorizer.vocabulary().max_phrase_words(), 2);
        assert_eq!(vectorizer.n_documents(), 2);
    }

    #[test]
    fn test_smoothed_idf() {
        let vectorizer = vectorizer();
        let idf = vectorizer.vocabulary().idf();
        // "chills" appears in both documents.
        assert!((idf[0] - 1.0).abs() < 1e-12);
        assert!((idf[2] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_unsmoothed_idf() {
        let config = TfIdfConfig {
            smooth_idf: false,
            ..TfIdfConfig::default()
        };
        let vectorizer = TfIdfVectorizer::fit(&examples(), config).unwrap();
        let idf = vectorizer.vocabulary().idf();
        assert!((idf[0] - 1.0).abs() < 1e-12);
        assert!((idf[2] - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_transform_is_l2_normalized() {
        let vectorizer = vectorizer();
        let features = vectorizer.transform(&tokens(&["chills", "fatigue"]));
        let norm: f64 = features.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        assert_eq!(features[3], 0.0);
        assert!(features[2] > features[0]); // rarer term weighs more
    }

    #[test]
    fn test_transform_is_order_independent() {
        let vectorizer = vectorizer();
        let a = vectorizer.transform(&tokens(&["chills", "high fever", "fatigue"]));
        let b = vectorizer.transform(&tokens(&["fatigue", "chills", "high fever"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_vocabulary_is_zero_vector() {
        let vectorizer = vectorizer();
        let features = vectorizer.transform(&tokens(&["xyzxyz-not-a-symptom"]));
        assert_eq!(features.len(), vectorizer.vocabulary_size());
        assert!(features.iter().all(|&x| x == 0.0));
        assert_eq!(vectorizer.vocabulary_size(), 5); // vocabulary not expanded
    }

    #[test]
    fn test_resolve_splits_whitespace_runs_into_phrases() {
        let vectorizer = vectorizer();
        let resolved = vectorizer.resolve(&tokens(&["continuous sneezing chills headache"]));
        let matched: Vec<&str> = resolved.matched.iter().map(|t| t.as_str()).collect();
        assert_eq!(matched, vec!["chills", "continuous sneezing"]);
        assert_eq!(resolved.unmatched, vec!["headache"]);

        let comma = vectorizer.transform(&tokens(&["chills", "fatigue"]));
        let space = vectorizer.transform(&tokens(&["chills fatigue"]));
        assert_eq!(comma, space);
    }

    #[test]
    fn test_resolve_reports_unknown_words() {
        let vectorizer = vectorizer();
        let resolved = vectorizer.resolve(&tokens(&["sore throat", "sore"]));
        assert!(resolved.matched.is_empty());
        assert_eq!(resolved.unmatched, vec!["sore", "throat"]);
    }

    #[test]
    fn test_resolve_ignores_token_boundaries() {
        let vectorizer = vectorizer();
        let split = vectorizer.resolve(&tokens(&["chills high", "fever"]));
        let whole = vectorizer.resolve(&tokens(&["chills", "high fever"]));
        assert_eq!(split, whole);
        let matched: Vec<&str> = split.matched.iter().map(|t| t.as_str()).collect();
        assert_eq!(matched, vec!["chills", "high fever"]);
        assert!(split.unmatched.is_empty());

        assert_eq!(
            vectorizer.transform(&tokens(&["chills high", "fever"])),
            vectorizer.transform(&tokens(&["chills", "high fever"]))
        );
    }

    #[test]
    fn test_training_example_counts_repeats() {
        let config = TfIdfConfig {
            norm: Norm::Off,
            ..TfIdfConfig::default()
        };
        let vectorizer = TfIdfVectorizer::fit(&examples(), config).unwrap();
        let example = TrainingExample::new("Malaria", tokens(&["chills", "chills", "vomiting"]));
        let features = vectorizer.transform_example(&example);
        assert!((features[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_without_examples() {
        assert!(matches!(
            TfIdfVectorizer::fit(&[], TfIdfConfig::default()),
            Err(SymptomaticError::InvalidArgument(_))
        ));
    }
}

//! Feature indexing and classification.
//!
//! Training runs once: [`tfidf::TfIdfVectorizer::fit`] builds the frozen
//! symptom vocabulary, a [`classifier::Classifier`] is trained on the weighted
//! vectors, and both are bundled into an immutable [`model::SymptomModel`].

pub mod classifier;
pub mod evaluation;
pub mod model;
pub mod naive_bayes;
pub mod tfidf;

pub use classifier::{Classifier, LabelDistribution};
pub use model::SymptomModel;
pub use naive_bayes::MultinomialNaiveBayes;
pub use tfidf::{TfIdfVectorizer, Vocabulary};

/// A dense feature vector, one weight per vocabulary term.
pub type FeatureVector = Vec<f64>;

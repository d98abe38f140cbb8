//! Classifier trait definition and the label distribution it produces.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ml::FeatureVector;

/// A multi-class probabilistic classifier over feature vectors.
///
/// Implementations must be deterministic: training twice on the same data
/// yields the same model.
pub trait Classifier: Send + Sync {
    /// Fit the model. `features[i]` is labelled `labels[i]`. Training again
    /// replaces the previous model.
    fn train(&mut self, features: &[FeatureVector], labels: &[String]) -> Result<()>;

    /// Probability of every training label for one feature vector.
    ///
    /// Fails with [`SymptomaticError::ModelNotTrained`](crate::error::SymptomaticError::ModelNotTrained)
    /// before [`train`](Classifier::train).
    fn predict(&self, features: &[f64]) -> Result<LabelDistribution>;

    /// Labels seen at training time, sorted.
    fn labels(&self) -> &[String];

    /// Whether [`train`](Classifier::train) has completed.
    fn is_trained(&self) -> bool;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

/// A probability for every label, summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDistribution {
    /// `(label, probability)` sorted by label.
    entries: Vec<(String, f64)>,
}

impl LabelDistribution {
    /// Build a distribution; entries are re-sorted by label.
    pub fn new(mut entries: Vec<(String, f64)>) -> Self {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        LabelDistribution { entries }
    }

    /// Probability of a label, if it was seen at training time.
    pub fn probability(&self, label: &str) -> Option<f64> {
        self.entries
            .binary_search_by(|(l, _)| l.as_str().cmp(label))
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// Entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, p)| (l.as_str(), *p))
    }

    /// Entries ordered by probability, highest first; equal probabilities are
    /// ordered by label.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// The most probable label.
    pub fn best(&self) -> Option<(&str, f64)> {
        self.ranked().into_iter().next()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no labels.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Top-level configuration.
//!
//! Every section has a `Default`, so a JSON config file only needs the keys it
//! wants to change:
//!
//! ```json
//! {
//!   "dataset": { "symptom_file": "data/DiseaseAndSymptoms.csv" },
//!   "classifier": { "alpha": 0.5 },
//!   "prediction": { "top_k": 3 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetConfig;
use crate::error::{Result, SymptomaticError};
use crate::ml::naive_bayes::NaiveBayesConfig;
use crate::ml::tfidf::TfIdfConfig;
use crate::prediction::PredictionConfig;

/// Configuration for the whole pipeline, from dataset layout to result ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymptomaticConfig {
    /// Where the tables live and how their columns are laid out.
    pub dataset: DatasetConfig,
    /// TF-IDF weighting options.
    pub vectorizer: TfIdfConfig,
    /// Naive Bayes smoothing.
    pub classifier: NaiveBayesConfig,
    /// Ranking and truncation of predictions.
    pub prediction: PredictionConfig,
}

impl SymptomaticConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SymptomaticError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: SymptomaticConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(self.classifier.alpha > 0.0 && self.classifier.alpha.is_finite()) {
            return Err(SymptomaticError::config(format!(
                "classifier.alpha must be a positive number, got {}",
                self.classifier.alpha
            )));
        }
        if self.prediction.top_k == 0 {
            return Err(SymptomaticError::config("prediction.top_k must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.prediction.min_confidence) {
            return Err(SymptomaticError::config(format!(
                "prediction.min_confidence must be within [0, 1], got {}",
                self.prediction.min_confidence
            )));
        }
        if self.dataset.symptoms.label_column.trim().is_empty()
            || self.dataset.precautions.label_column.trim().is_empty()
        {
            return Err(SymptomaticError::config("label_column must not be empty"));
        }
        Ok(())
    }
}

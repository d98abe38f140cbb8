//! Multinomial naive Bayes with additive smoothing.
//!
//! For label `c` and feature `j`:
//!
//! ```text
//! log P(j | c) = ln((N_cj + α) / (N_c + α·|V|))
//! log P(c | x) ∝ log P(c) + Σ_j x_j · log P(j | c)
//! ```
//!
//! where `N_cj` is the summed weight of feature `j` over examples of `c` and
//! `N_c = Σ_j N_cj`. Smoothing keeps a label whose examples never contained a
//! query feature from dropping to zero probability.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SymptomaticError};
use crate::ml::FeatureVector;
use crate::ml::classifier::{Classifier, LabelDistribution};

/// Options for [`MultinomialNaiveBayes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Additive smoothing parameter; must be positive.
    pub alpha: f64,
    /// Learn class priors from label frequencies; uniform priors otherwise.
    pub fit_prior: bool,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            fit_prior: true,
        }
    }
}

/// Multinomial naive Bayes classifier.
#[derive(Debug, Clone)]
pub struct MultinomialNaiveBayes {
    config: NaiveBayesConfig,
    labels: Vec<String>,
    class_log_prior: Vec<f64>,
    /// `feature_log_prob[c][j]`
    feature_log_prob: Vec<Vec<f64>>,
    n_features: usize,
    trained: bool,
}

impl MultinomialNaiveBayes {
    /// Create an untrained classifier.
    pub fn new(config: NaiveBayesConfig) -> Result<Self> {
        if !(config.alpha > 0.0 && config.alpha.is_finite()) {
            return Err(SymptomaticError::invalid_argument(format!(
                "alpha must be a positive number, got {}",
                config.alpha
            )));
        }
        Ok(MultinomialNaiveBayes {
            config,
            labels: Vec::new(),
            class_log_prior: Vec::new(),
            feature_log_prob: Vec::new(),
            n_features: 0,
            trained: false,
        })
    }

    /// The smoothing parameter.
    pub fn alpha(&self) -> f64 {
        self.config.alpha
    }

    /// Feature dimension seen at training time.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    fn validate(features: &[FeatureVector], labels: &[String]) -> Result<usize> {
        if features.is_empty() {
            return Err(SymptomaticError::invalid_argument(
                "cannot train on zero examples",
            ));
        }
        if features.len() != labels.len() {
            return Err(SymptomaticError::invalid_argument(format!(
                "{} feature vectors but {} labels",
                features.len(),
                labels.len()
            )));
        }
        let n_features = features[0].len();
        for (i, row) in features.iter().enumerate() {
            if row.len() != n_features {
                return Err(SymptomaticError::invalid_argument(format!(
                    "example {i} has {} features, expected {n_features}",
                    row.len()
                )));
            }
            if row.iter().any(|x| !x.is_finite() || *x < 0.0) {
                return Err(SymptomaticError::invalid_argument(format!(
                    "example {i} has a negative or non-finite feature"
                )));
            }
        }
        Ok(n_features)
    }
}

impl Classifier for MultinomialNaiveBayes {
    fn train(&mut self, features: &[FeatureVector], labels: &[String]) -> Result<()> {
        let n_features = Self::validate(features, labels)?;

        let mut by_label: BTreeMap<&str, (usize, Vec<f64>)> = BTreeMap::new();
        for (row, label) in features.iter().zip(labels) {
            let (count, totals) = by_label
                .entry(label.as_str())
                .or_insert_with(|| (0, vec![0.0; n_features]));
            *count += 1;
            for (total, x) in totals.iter_mut().zip(row) {
                *total += x;
            }
        }

        let alpha = self.config.alpha;
        let n_examples = features.len() as f64;
        let n_labels = by_label.len() as f64;
        let mut names = Vec::with_capacity(by_label.len());
        let mut class_log_prior = Vec::with_capacity(by_label.len());
        let mut feature_log_prob = Vec::with_capacity(by_label.len());

        for (label, (count, totals)) in by_label {
            let prior = if self.config.fit_prior {
                (count as f64 / n_examples).ln()
            } else {
                -n_labels.ln()
            };
            let denominator = (totals.iter().sum::<f64>() + alpha * n_features as f64).ln();
            let log_probs = totals
                .iter()
                .map(|total| (total + alpha).ln() - denominator)
                .collect();

            names.push(label.to_string());
            class_log_prior.push(prior);
            feature_log_prob.push(log_probs);
        }

        debug!(
            "naive bayes trained on {} examples, {} labels, {} features",
            features.len(),
            names.len(),
            n_features
        );

        self.labels = names;
        self.class_log_prior = class_log_prior;
        self.feature_log_prob = feature_log_prob;
        self.n_features = n_features;
        self.trained = true;
        Ok(())
    }

    fn predict(&self, features: &[f64]) -> Result<LabelDistribution> {
        if !self.trained {
            return Err(SymptomaticError::not_trained(
                "naive bayes predict called before train",
            ));
        }
        if features.len() != self.n_features {
            return Err(SymptomaticError::invalid_argument(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }

        let joint: Vec<f64> = self
            .class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior
                    + features
                        .iter()
                        .zip(log_probs)
                        .filter(|(x, _)| **x != 0.0)
                        .map(|(x, lp)| x * lp)
                        .sum::<f64>()
            })
            .collect();

        // log-sum-exp
        let max = joint.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let exp: Vec<f64> = joint.iter().map(|j| (j - max).exp()).collect();
        let sum: f64 = exp.iter().sum();

        Ok(LabelDistribution::new(
            self.labels
                .iter()
                .cloned()
                .zip(exp.into_iter().map(|e| e / sum))
                .collect(),
        ))
    }

    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn is_trained(&self) -> bool {
        self.trained
    }

    fn name(&self) -> &str {
        "multinomial_naive_bayes"
    }
}

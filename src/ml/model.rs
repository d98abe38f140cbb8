//! The trained model handle.
//!
//! [`SymptomModel::initialize`] is the single initialization entry point: it
//! loads the dataset, fits the vectorizer, trains the classifier and returns
//! an `Arc` that request handlers share read-only.

use std::sync::Arc;

use log::info;

use crate::analysis::analyzer::SymptomAnalyzer;
use crate::config::SymptomaticConfig;
use crate::dataset::{Dataset, SymptomToken, TrainingExample};
use crate::error::Result;
use crate::ml::FeatureVector;
use crate::ml::classifier::{Classifier, LabelDistribution};
use crate::ml::naive_bayes::MultinomialNaiveBayes;
use crate::ml::tfidf::{PhraseMatch, TfIdfConfig, TfIdfVectorizer};

/// Everything needed to answer predictions, frozen after training.
pub struct SymptomModel {
    analyzer: SymptomAnalyzer,
    vectorizer: TfIdfVectorizer,
    classifier: Box<dyn Classifier>,
    dataset: Dataset,
}

impl std::fmt::Debug for SymptomModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymptomModel")
            .field("classifier", &self.classifier.name())
            .field("labels", &self.classifier.labels().len())
            .field("vocabulary_size", &self.vectorizer.vocabulary_size())
            .field("records", &self.dataset.records().len())
            .finish()
    }
}

impl SymptomModel {
    /// Load the configured dataset files and train.
    pub fn initialize(config: &SymptomaticConfig) -> Result<Arc<Self>> {
        config.validate()?;
        let dataset = Dataset::load_files(&config.dataset)?;
        Ok(Arc::new(Self::train(dataset, config)?))
    }

    /// Train the default multinomial naive Bayes model on a loaded dataset.
    pub fn train(dataset: Dataset, config: &SymptomaticConfig) -> Result<Self> {
        let classifier = MultinomialNaiveBayes::new(config.classifier.clone())?;
        Self::with_classifier(dataset, config.vectorizer.clone(), Box::new(classifier))
    }

    /// Train with any classifier implementation.
    pub fn with_classifier(
        dataset: Dataset,
        vectorizer_config: TfIdfConfig,
        mut classifier: Box<dyn Classifier>,
    ) -> Result<Self> {
        let examples = dataset.training_examples();
        let vectorizer = TfIdfVectorizer::fit(&examples, vectorizer_config)?;

        let features: Vec<FeatureVector> = examples
            .iter()
            .map(|example| vectorizer.transform_example(example))
            .collect();
        let labels: Vec<String> = examples.iter().map(|e| e.label.clone()).collect();
        classifier.train(&features, &labels)?;

        info!(
            "Trained {} on {} examples: {} diseases, vocabulary of {} symptoms",
            classifier.name(),
            examples.len(),
            classifier.labels().len(),
            vectorizer.vocabulary_size()
        );

        Ok(SymptomModel {
            analyzer: SymptomAnalyzer::new()?,
            vectorizer,
            classifier,
            dataset,
        })
    }

    /// The analyzer shared by loading and querying.
    pub fn analyzer(&self) -> &SymptomAnalyzer {
        &self.analyzer
    }

    /// The fitted vectorizer.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    /// The trained classifier.
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// The dataset the model was trained on.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Diseases the classifier can predict, sorted.
    pub fn labels(&self) -> &[String] {
        self.classifier.labels()
    }

    /// Precautions for a disease; empty when unknown.
    pub fn precautions_for(&self, disease: &str) -> &[String] {
        self.dataset.precautions_for(disease)
    }

    /// Resolve, vectorize and classify normalized query tokens.
    pub fn score(&self, tokens: &[SymptomToken]) -> Result<(PhraseMatch, LabelDistribution)> {
        let resolved = self.vectorizer.resolve(tokens);
        let features = self.vectorizer.transform_matched(&resolved);
        let distribution = self.classifier.predict(&features)?;
        Ok((resolved, distribution))
    }

    /// Classify a training-style example (its symptoms taken as a query).
    pub fn score_example(&self, example: &TrainingExample) -> Result<LabelDistribution> {
        let (_, distribution) = self.score(&example.symptoms)?;
        Ok(distribution)
    }
}

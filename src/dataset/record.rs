//! Disease records and the training examples derived from them.

use serde::{Deserialize, Serialize};

use crate::dataset::symptom::SymptomToken;

/// One row of the disease↔symptom table.
///
/// A disease may appear in several rows with different symptom subsets; each
/// row is its own record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Disease identifier, trimmed but otherwise as written in the source.
    pub name: String,
    /// Symptoms in source order, without duplicates.
    pub symptoms: Vec<SymptomToken>,
}

impl DiseaseRecord {
    /// Create a record, dropping repeated symptoms while keeping first-seen order.
    pub fn new<S: Into<String>>(name: S, symptoms: Vec<SymptomToken>) -> Self {
        let mut unique: Vec<SymptomToken> = Vec::with_capacity(symptoms.len());
        for symptom in symptoms {
            if !unique.contains(&symptom) {
                unique.push(symptom);
            }
        }
        DiseaseRecord {
            name: name.into(),
            symptoms: unique,
        }
    }

    /// The training example for this row.
    pub fn to_training_example(&self) -> TrainingExample {
        TrainingExample {
            label: self.name.clone(),
            symptoms: self.symptoms.clone(),
        }
    }
}

/// A labelled symptom bag used to fit the vectorizer and the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Disease identifier.
    pub label: String,
    /// The symptom bag; each entry is one term.
    pub symptoms: Vec<SymptomToken>,
}

impl TrainingExample {
    /// Create a training example from a label and symptom phrases.
    pub fn new<S: Into<String>>(label: S, symptoms: Vec<SymptomToken>) -> Self {
        TrainingExample {
            label: label.into(),
            symptoms,
        }
    }

    /// The symptoms joined by single spaces.
    pub fn pseudo_document(&self) -> String {
        self.symptoms
            .iter()
            .map(SymptomToken::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

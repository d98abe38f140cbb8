//! Accuracy reporting for a trained model.

use serde::{Deserialize, Serialize};

use crate::dataset::TrainingExample;
use crate::error::{Result, SymptomaticError};
use crate::ml::model::SymptomModel;

/// One example whose top prediction was wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Misclassification {
    pub expected: String,
    pub predicted: String,
    pub confidence: f64,
}

/// Top-1 and top-k accuracy over a set of labelled examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub examples: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub top_k: usize,
    pub top_k_correct: usize,
    pub top_k_accuracy: f64,
    pub misclassified: Vec<Misclassification>,
}

/// Split items into `(train, test)`, sending every `every`-th item to the
/// test set. Deterministic.
pub fn holdout_split<T>(items: Vec<T>, every: usize) -> Result<(Vec<T>, Vec<T>)> {
    if every < 2 {
        return Err(SymptomaticError::invalid_argument(
            "holdout interval must be at least 2",
        ));
    }
    let (test, train): (Vec<_>, Vec<_>) = items
        .into_iter()
        .enumerate()
        .partition(|(i, _)| (i + 1) % every == 0);
    Ok((
        train.into_iter().map(|(_, e)| e).collect(),
        test.into_iter().map(|(_, e)| e).collect(),
    ))
}

/// Score every example and compare the ranking with its label.
pub fn evaluate(
    model: &SymptomModel,
    examples: &[TrainingExample],
    top_k: usize,
) -> Result<EvaluationReport> {
    if examples.is_empty() {
        return Err(SymptomaticError::invalid_argument(
            "cannot evaluate on zero examples",
        ));
    }
    let top_k = top_k.max(1);

    let mut correct = 0;
    let mut top_k_correct = 0;
    let mut misclassified = Vec::new();

    for example in examples {
        let distribution = model.score_example(example)?;
        let ranked = distribution.ranked();
        let Some(&(best, confidence)) = ranked.first() else {
            continue;
        };

        if best == example.label {
            correct += 1;
        } else {
            misclassified.push(Misclassification {
                expected: example.label.clone(),
                predicted: best.to_string(),
                confidence,
            });
        }
        if ranked.iter().take(top_k).any(|(label, _)| *label == example.label) {
            top_k_correct += 1;
        }
    }

    let n = examples.len();
    Ok(EvaluationReport {
        examples: n,
        correct,
        accuracy: correct as f64 / n as f64,
        top_k,
        top_k_correct,
        top_k_accuracy: top_k_correct as f64 / n as f64,
        misclassified,
    })
}

//! Prediction result types handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::dataset::SymptomToken;

/// Display band for a confidence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    /// 70% and above.
    High,
    /// 50% to 70%.
    Elevated,
    /// 30% to 50%.
    Moderate,
    /// Below 30%.
    Low,
}

impl ConfidenceBand {
    /// Band for a percentage in `[0, 100]`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            ConfidenceBand::High
        } else if percentage >= 50.0 {
            ConfidenceBand::Elevated
        } else if percentage >= 30.0 {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }

    /// Lowercase name of the band.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Elevated => "elevated",
            ConfidenceBand::Moderate => "moderate",
            ConfidenceBand::Low => "low",
        }
    }
}

impl std::fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Disease identifier as written in the dataset.
    pub disease: String,
    /// Classifier probability in `[0, 1]`.
    pub confidence: f64,
    /// Precaution advice, possibly empty.
    pub precautions: Vec<String>,
}

impl Prediction {
    /// Confidence as a percentage, for display.
    pub fn percentage(&self) -> f64 {
        self.confidence * 100.0
    }

    /// Display band of the confidence.
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_percentage(self.percentage())
    }
}

/// The answer to one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Known symptoms recognised in the query, sorted.
    pub matched_symptoms: Vec<SymptomToken>,
    /// Query text that matched no known symptom, sorted.
    pub unmatched_symptoms: Vec<String>,
    /// Whether the query mentions an emergency symptom.
    pub emergency: bool,
    /// The emergency phrases found in the query, in a fixed order.
    pub emergency_symptoms: Vec<String>,
    /// Predictions, most probable first.
    pub predictions: Vec<Prediction>,
}

impl PredictionResult {
    /// The most probable prediction.
    pub fn top(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    /// Number of predictions.
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    /// Whether there are no predictions.
    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// True when nothing in the query was a known symptom, so the ranking only
    /// reflects label frequencies.
    pub fn is_unknown_input(&self) -> bool {
        self.matched_symptoms.is_empty()
    }
}

/// What the presentation layer receives: either predictions or a
/// user-correctable rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredictionResponse {
    Predicted(PredictionResult),
    Rejected { reason: String },
}

impl PredictionResponse {
    /// The result, when the query was accepted.
    pub fn result(&self) -> Option<&PredictionResult> {
        match self {
            PredictionResponse::Predicted(result) => Some(result),
            PredictionResponse::Rejected { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bands() {
        assert_eq!(ConfidenceBand::from_percentage(85.0), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_percentage(70.0), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_percentage(55.5), ConfidenceBand::Elevated);
        assert_eq!(ConfidenceBand::from_percentage(30.0), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_percentage(2.0), ConfidenceBand::Low);
    }

    #[test]
    fn test_prediction_percentage() {
        let prediction = Prediction {
            disease: "Malaria".to_string(),
            confidence: 0.625,
            precautions: Vec::new(),
        };
        assert_eq!(prediction.percentage(), 62.5);
        assert_eq!(prediction.band(), ConfidenceBand::Elevated);
    }

    #[test]
    fn test_response_serialization() {
        let rejected = PredictionResponse::Rejected {
            reason: "empty".to_string(),
        };
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json["status"], "rejected");
        assert!(rejected.result().is_none());
    }
}

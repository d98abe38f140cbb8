//! The prediction service: free text in, ranked diseases with precautions out.

pub mod result;
pub mod service;
pub mod triage;

use serde::{Deserialize, Serialize};

pub use result::{ConfidenceBand, Prediction, PredictionResponse, PredictionResult};
pub use service::PredictionService;

/// Ranking options for [`PredictionService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Number of predictions returned when the caller passes `top_k == 0`.
    pub top_k: usize,
    /// Predictions below this probability are dropped after truncation.
    pub min_confidence: f64,
    /// Flag queries that mention emergency symptoms.
    pub detect_emergencies: bool,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            min_confidence: 0.0,
            detect_emergencies: true,
        }
    }
}

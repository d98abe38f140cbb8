//! Per-request prediction over a shared, frozen model.
//!
//! A request moves through `RECEIVED → NORMALIZED → VECTORIZED → SCORED →
//! ENRICHED → RETURNED` without touching any shared mutable state, so one
//! service can answer any number of requests in parallel.

use std::sync::Arc;

use log::{debug, trace};
use rayon::prelude::*;

use crate::dataset::SymptomToken;
use crate::error::{Result, SymptomaticError};
use crate::ml::model::SymptomModel;
use crate::prediction::PredictionConfig;
use crate::prediction::result::{Prediction, PredictionResponse, PredictionResult};
use crate::prediction::triage;

/// Answers symptom queries against a trained [`SymptomModel`].
#[derive(Debug, Clone)]
pub struct PredictionService {
    model: Arc<SymptomModel>,
    config: PredictionConfig,
}

impl PredictionService {
    /// Create a service over a trained model.
    pub fn new(model: Arc<SymptomModel>, config: PredictionConfig) -> Self {
        PredictionService { model, config }
    }

    /// The shared model.
    pub fn model(&self) -> &Arc<SymptomModel> {
        &self.model
    }

    /// The ranking options.
    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Rank diseases for free-text symptom input.
    ///
    /// Symptoms may be separated by commas, semicolons, newlines or plain
    /// whitespace; case and token order do not matter. `top_k == 0` means the
    /// configured default. Input with no symptom at all fails with
    /// [`SymptomaticError::EmptyQuery`]; input with only unknown symptoms
    /// succeeds with the prior distribution.
    pub fn predict(&self, text: &str, top_k: usize) -> Result<PredictionResult> {
        trace!("RECEIVED {} bytes", text.len());

        let tokens = self.model.analyzer().symptoms(text)?;
        if tokens.is_empty() {
            debug!("query has no symptoms after normalization");
            return Err(SymptomaticError::EmptyQuery);
        }
        trace!("NORMALIZED {} tokens", tokens.len());

        let emergency_symptoms: Vec<String> = if self.config.detect_emergencies {
            let words = tokens
                .iter()
                .map(|token| token.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            triage::emergency_phrases(&words)
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        let vectorizer = self.model.vectorizer();
        let resolved = vectorizer.resolve(&tokens);
        let features = vectorizer.transform_matched(&resolved);
        if resolved.matched.is_empty() {
            debug!("no known symptom in {:?}, ranking by prior", resolved.unmatched);
        }
        trace!(
            "VECTORIZED {} known, {} unknown",
            resolved.matched.len(),
            resolved.unmatched.len()
        );

        let distribution = self.model.classifier().predict(&features)?;
        trace!("SCORED {} labels", distribution.len());

        let k = if top_k == 0 { self.config.top_k } else { top_k };
        let predictions: Vec<Prediction> = distribution
            .ranked()
            .into_iter()
            .take(k)
            .filter(|(_, confidence)| *confidence >= self.config.min_confidence)
            .map(|(disease, confidence)| Prediction {
                disease: disease.to_string(),
                confidence,
                precautions: self.model.precautions_for(disease).to_vec(),
            })
            .collect();
        trace!("ENRICHED {} predictions", predictions.len());

        let result = PredictionResult {
            matched_symptoms: resolved.matched,
            unmatched_symptoms: resolved.unmatched,
            emergency: !emergency_symptoms.is_empty(),
            emergency_symptoms,
            predictions,
        };
        trace!("RETURNED");
        Ok(result)
    }

    /// Like [`predict`](Self::predict), but turns user-correctable failures
    /// into [`PredictionResponse::Rejected`]. Other errors are faults and are
    /// still returned as errors.
    pub fn respond(&self, text: &str, top_k: usize) -> Result<PredictionResponse> {
        match self.predict(text, top_k) {
            Ok(result) => Ok(PredictionResponse::Predicted(result)),
            Err(e) if e.is_user_error() => Ok(PredictionResponse::Rejected {
                reason: e.to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    /// Answer many queries in parallel, one result per query in input order.
    pub fn predict_batch<S: AsRef<str> + Sync>(
        &self,
        queries: &[S],
        top_k: usize,
    ) -> Vec<Result<PredictionResponse>> {
        queries
            .par_iter()
            .map(|query| self.respond(query.as_ref(), top_k))
            .collect()
    }

    /// Precautions for a disease, matched case- and whitespace-insensitively.
    /// Unknown diseases yield an empty list.
    pub fn precautions_for(&self, disease: &str) -> Vec<String> {
        self.model.precautions_for(disease).to_vec()
    }

    /// Every symptom the model knows, sorted.
    pub fn known_symptoms(&self) -> &[SymptomToken] {
        self.model.vectorizer().vocabulary().terms()
    }

    /// Every disease the model can predict, sorted.
    pub fn known_diseases(&self) -> &[String] {
        self.model.labels()
    }
}

//! # Symptomatic
//!
//! Symptom-to-disease classification for Rust.
//!
//! ## Features
//!
//! - CSV loading of disease/symptom and disease/precaution tables
//! - Symptom normalization through a configurable analysis pipeline
//! - TF-IDF weighting over whole symptom phrases
//! - Multinomial naive Bayes with additive smoothing
//! - Ranked predictions with precautions and emergency flagging
//!
//! ## Example
//!
//! ```no_run
//! use symptomatic::config::SymptomaticConfig;
//! use symptomatic::ml::model::SymptomModel;
//! use symptomatic::prediction::PredictionService;
//!
//! # fn main() -> symptomatic::error::Result<()> {
//! let config = SymptomaticConfig::default();
//! let model = SymptomModel::initialize(&config)?;
//! let service = PredictionService::new(model, config.prediction.clone());
//!
//! let result = service.predict("chills, fatigue", 5)?;
//! for prediction in &result.predictions {
//!     println!("{}: {:.1}%", prediction.disease, prediction.percentage());
//! }
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ml;
pub mod prediction;

pub mod prelude {
    pub use crate::config::SymptomaticConfig;
    pub use crate::dataset::{Dataset, SymptomToken};
    pub use crate::error::{Result, SymptomaticError};
    pub use crate::ml::model::SymptomModel;
    pub use crate::prediction::{Prediction, PredictionResult, PredictionService};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

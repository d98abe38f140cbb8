//! Error types for the Symptomatic library.
//!
//! All errors are represented by the [`SymptomaticError`] enum. Startup failures
//! (unreadable or empty datasets) surface as [`SymptomaticError::DataLoad`], the
//! only user-correctable request failure is [`SymptomaticError::EmptyQuery`], and
//! using a classifier before training yields [`SymptomaticError::ModelNotTrained`].
//!
//! # Examples
//!
//! ```
//! use symptomatic::error::{SymptomaticError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SymptomaticError::data_load("Disease table has no rows"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Symptomatic operations.
#[derive(Error, Debug)]
pub enum SymptomaticError {
    /// A dataset source could not be read or contained no usable rows.
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// The query contained no symptom after normalization.
    #[error("Empty query: enter at least one symptom")]
    EmptyQuery,

    /// A classifier was used before it was trained.
    #[error("Model not trained: {0}")]
    ModelNotTrained(String),

    /// Invalid argument passed to an API
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Text analysis errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SymptomaticError.
pub type Result<T> = std::result::Result<T, SymptomaticError>;

impl SymptomaticError {
    /// Create a new data load error.
    pub fn data_load<S: Into<String>>(msg: S) -> Self {
        SymptomaticError::DataLoad(msg.into())
    }

    /// Create a new model-not-trained error.
    pub fn not_trained<S: Into<String>>(msg: S) -> Self {
        SymptomaticError::ModelNotTrained(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SymptomaticError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SymptomaticError::Config(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SymptomaticError::Analysis(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SymptomaticError::Other(msg.into())
    }

    /// Whether the caller can fix this error by changing their input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, SymptomaticError::EmptyQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SymptomaticError::data_load("missing file");
        assert_eq!(error.to_string(), "Data load error: missing file");

        let error = SymptomaticError::not_trained("predict called first");
        assert_eq!(error.to_string(), "Model not trained: predict called first");

        let error = SymptomaticError::invalid_argument("alpha must be positive");
        assert_eq!(error.to_string(), "Invalid argument: alpha must be positive");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SymptomaticError::from(io_error);

        match error {
            SymptomaticError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_user_error_classification() {
        assert!(SymptomaticError::EmptyQuery.is_user_error());
        assert!(!SymptomaticError::not_trained("x").is_user_error());
        assert!(!SymptomaticError::data_load("x").is_user_error());
    }
}

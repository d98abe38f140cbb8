//! Dataset loading: the disease↔symptom table and the disease↔precaution table.
//!
//! Both tables are CSV files with a header row, a label column naming the
//! disease and a variable number of value columns. Column names are
//! configuration ([`TableLayout`]), not constants.

pub mod loader;
pub mod precaution;
pub mod record;
pub mod statistics;
pub mod symptom;
pub mod table;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use loader::Dataset;
pub use precaution::{PrecautionBook, disease_key};
pub use record::{DiseaseRecord, TrainingExample};
pub use statistics::{DatasetStatistics, DiseaseCount, SymptomCount};
pub use symptom::SymptomToken;
pub use table::{TableLayout, TableRow};

/// Location and layout of the dataset files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path of the disease↔symptom table.
    pub symptom_file: PathBuf,
    /// Path of the disease↔precaution table.
    pub precaution_file: PathBuf,
    /// Column layout of the symptom table.
    pub symptoms: TableLayout,
    /// Column layout of the precaution table.
    pub precautions: TableLayout,
    /// Field delimiter shared by both files.
    pub delimiter: char,
    /// Maximum number of precautions kept per disease.
    pub max_precautions: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            symptom_file: PathBuf::from("DiseaseAndSymptoms.csv"),
            precaution_file: PathBuf::from("Disease precaution.csv"),
            symptoms: TableLayout::new("Disease", Some("Symptom")),
            precautions: TableLayout::new("Disease", Some("Precaution")),
            delimiter: ',',
            max_precautions: 4,
        }
    }
}

//! Loads both tables into an immutable [`Dataset`].

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{info, warn};

use crate::analysis::analyzer::SymptomAnalyzer;
use crate::dataset::DatasetConfig;
use crate::dataset::precaution::PrecautionBook;
use crate::dataset::record::{DiseaseRecord, TrainingExample};
use crate::dataset::symptom::SymptomToken;
use crate::dataset::table::read_table;
use crate::error::{Result, SymptomaticError};

/// Disease records and precautions, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<DiseaseRecord>,
    precautions: PrecautionBook,
}

impl Dataset {
    /// Build a dataset from already-parsed parts.
    pub fn from_parts(records: Vec<DiseaseRecord>, precautions: PrecautionBook) -> Self {
        Dataset {
            records,
            precautions,
        }
    }

    /// Load the files named in `config`.
    pub fn load_files(config: &DatasetConfig) -> Result<Self> {
        let symptoms = open(&config.symptom_file)?;
        let precautions = open(&config.precaution_file)?;
        Self::load(symptoms, precautions, config)
    }

    /// Load both tables from readers.
    ///
    /// Rows without a disease name or without any symptom are skipped with a
    /// warning. Fails when either table yields no usable row.
    pub fn load<S: Read, P: Read>(
        symptom_source: S,
        precaution_source: P,
        config: &DatasetConfig,
    ) -> Result<Self> {
        let analyzer = SymptomAnalyzer::new()?;

        let rows = read_table(symptom_source, &config.symptoms, config.delimiter, "symptom table")?;
        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            if row.label.is_empty() {
                warn!("symptom table line {}: no disease name, row skipped", row.line);
                continue;
            }
            let mut symptoms = Vec::new();
            for cell in &row.values {
                symptoms.extend(analyzer.symptoms(cell)?);
            }
            if symptoms.is_empty() {
                warn!(
                    "symptom table line {}: '{}' has no symptoms, row skipped",
                    row.line, row.label
                );
                continue;
            }
            records.push(DiseaseRecord::new(row.label, symptoms));
        }
        if records.is_empty() {
            return Err(SymptomaticError::data_load("symptom table has no usable rows"));
        }

        let rows = read_table(
            precaution_source,
            &config.precautions,
            config.delimiter,
            "precaution table",
        )?;
        let precautions = PrecautionBook::from_rows(&rows, config.max_precautions);
        if precautions.is_empty() {
            return Err(SymptomaticError::data_load("precaution table has no usable rows"));
        }

        let dataset = Self::from_parts(records, precautions);
        info!(
            "Loaded {} symptom rows covering {} diseases and {} symptoms; precautions for {} diseases",
            dataset.records.len(),
            dataset.diseases().len(),
            dataset.symptoms().len(),
            dataset.precautions.len()
        );
        Ok(dataset)
    }

    /// All records, one per usable source row.
    pub fn records(&self) -> &[DiseaseRecord] {
        &self.records
    }

    /// One training example per record; repeated diseases are kept.
    pub fn training_examples(&self) -> Vec<TrainingExample> {
        self.records
            .iter()
            .map(DiseaseRecord::to_training_example)
            .collect()
    }

    /// The precaution table.
    pub fn precautions(&self) -> &PrecautionBook {
        &self.precautions
    }

    /// Precautions for a disease; empty when unknown.
    pub fn precautions_for(&self, disease: &str) -> &[String] {
        self.precautions.get(disease)
    }

    /// Distinct disease names from the symptom table, sorted.
    pub fn diseases(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct symptoms across all records, sorted.
    pub fn symptoms(&self) -> Vec<SymptomToken> {
        self.records
            .iter()
            .flat_map(|r| r.symptoms.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|e| {
        SymptomaticError::data_load(format!("cannot open {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYMPTOMS: &str = "\
Disease,Symptom_1,Symptom_2,Symptom_3
Common Cold, continuous_sneezing, chills, fatigue
Malaria, chills, vomiting, high_fever
Malaria, chills, high_fever,
,itching,,
Acne,,,
";

    const PRECAUTIONS: &str = "\
Disease,Precaution_1,Precaution_2,Precaution_3,Precaution_4
Malaria,Consult nearest hospital,Avoid oily food,Avoid non-veg food,Keep mosquitoes out
Common Cold,drink vitamin c rich drinks,take vapour,avoid cold food,keep fever in check
";

    fn load() -> Dataset {
        Dataset::load(
            SYMPTOMS.as_bytes(),
            PRECAUTIONS.as_bytes(),
            &DatasetConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_rows_are_kept_per_line() {
        let dataset = load();
        assert_eq!(dataset.records().len(), 3);
        assert_eq!(dataset.training_examples()[2].label, "Malaria");
        assert_eq!(dataset.diseases(), vec!["Common Cold", "Malaria"]);
    }

    #[test]
    fn test_symptoms_are_normalized() {
        let dataset = load();
        let first: Vec<&str> = dataset.records()[0].symptoms.iter().map(|s| s.as_str()).collect();
        assert_eq!(first, vec!["continuous sneezing", "chills", "fatigue"]);
        assert_eq!(dataset.symptoms().len(), 5);
    }

    #[test]
    fn test_precautions_in_order() {
        let dataset = load();
        assert_eq!(
            dataset.precautions_for("Malaria"),
            [
                "Consult nearest hospital",
                "Avoid oily food",
                "Avoid non-veg food",
                "Keep mosquitoes out"
            ]
        );
        assert!(dataset.precautions_for("Dengue").is_empty());
    }

    #[test]
    fn test_no_usable_symptom_rows() {
        let result = Dataset::load(
            "Disease,Symptom_1\nAcne,\n".as_bytes(),
            PRECAUTIONS.as_bytes(),
            &DatasetConfig::default(),
        );
        assert!(matches!(result, Err(SymptomaticError::DataLoad(_))));
    }

    #[test]
    fn test_no_usable_precaution_rows() {
        let result = Dataset::load(
            SYMPTOMS.as_bytes(),
            "Disease,Precaution_1\n".as_bytes(),
            &DatasetConfig::default(),
        );
        assert!(matches!(result, Err(SymptomaticError::DataLoad(_))));
    }

    #[test]
    fn test_missing_file() {
        let config = DatasetConfig {
            symptom_file: "/nonexistent/DiseaseAndSymptoms.csv".into(),
            ..DatasetConfig::default()
        };
        let result = Dataset::load_files(&config);
        assert!(matches!(result, Err(SymptomaticError::DataLoad(_))));
    }
}

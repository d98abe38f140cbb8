//! Summary counts over a loaded dataset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dataset::loader::Dataset;
use crate::dataset::symptom::SymptomToken;

/// Number of symptoms listed by default in [`DatasetStatistics::top_symptoms`].
pub const DEFAULT_TOP_SYMPTOMS: usize = 15;

/// Rows recorded for one disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseCount {
    pub disease: String,
    pub records: usize,
}

/// Rows a symptom appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomCount {
    pub symptom: SymptomToken,
    pub occurrences: usize,
}

/// Totals and frequency tables for a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    /// Distinct diseases.
    pub diseases: usize,
    /// Distinct symptoms.
    pub unique_symptoms: usize,
    /// Usable rows of the symptom table.
    pub records: usize,
    /// Every disease, most rows first, then by name.
    pub records_per_disease: Vec<DiseaseCount>,
    /// The most frequent symptoms, most rows first, then by name.
    pub top_symptoms: Vec<SymptomCount>,
}

impl Dataset {
    /// Count rows per disease and symptom occurrences, keeping the
    /// `top_symptoms` most frequent symptoms.
    pub fn statistics(&self, top_symptoms: usize) -> DatasetStatistics {
        let mut per_disease: BTreeMap<&str, usize> = BTreeMap::new();
        let mut per_symptom: BTreeMap<&SymptomToken, usize> = BTreeMap::new();
        for record in self.records() {
            *per_disease.entry(record.name.as_str()).or_insert(0) += 1;
            for symptom in &record.symptoms {
                *per_symptom.entry(symptom).or_insert(0) += 1;
            }
        }

        let diseases = per_disease.len();
        let unique_symptoms = per_symptom.len();

        let mut records_per_disease: Vec<DiseaseCount> = per_disease
            .into_iter()
            .map(|(disease, records)| DiseaseCount {
                disease: disease.to_string(),
                records,
            })
            .collect();
        // Stable sort keeps name order among equal counts.
        records_per_disease.sort_by(|a, b| b.records.cmp(&a.records));

        let mut symptoms: Vec<SymptomCount> = per_symptom
            .into_iter()
            .map(|(symptom, occurrences)| SymptomCount {
                symptom: symptom.clone(),
                occurrences,
            })
            .collect();
        symptoms.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        symptoms.truncate(top_symptoms);

        DatasetStatistics {
            diseases,
            unique_symptoms,
            records: self.records().len(),
            records_per_disease,
            top_symptoms: symptoms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DiseaseRecord, PrecautionBook};

    fn dataset() -> Dataset {
        let record = |name: &str, symptoms: &[&str]| {
            DiseaseRecord::new(
                name,
                symptoms.iter().filter_map(|s| SymptomToken::parse(s)).collect(),
            )
        };
        Dataset::from_parts(
            vec![
                record("Malaria", &["chills", "vomiting", "high_fever"]),
                record("Common Cold", &["continuous_sneezing", "chills", "fatigue"]),
                record("Malaria", &["chills", "high_fever", "sweating"]),
                record("Acne", &["skin_rash", "blackheads"]),
            ],
            PrecautionBook::new(4),
        )
    }

    #[test]
    fn test_totals() {
        let stats = dataset().statistics(DEFAULT_TOP_SYMPTOMS);
        assert_eq!(stats.diseases, 3);
        assert_eq!(stats.unique_symptoms, 8);
        assert_eq!(stats.records, 4);
        assert_eq!(stats.top_symptoms.len(), 8);
    }

    #[test]
    fn test_records_per_disease_ordering() {
        let stats = dataset().statistics(DEFAULT_TOP_SYMPTOMS);
        let counts: Vec<(&str, usize)> = stats
            .records_per_disease
            .iter()
            .map(|c| (c.disease.as_str(), c.records))
            .collect();
        assert_eq!(counts, vec![("Malaria", 2), ("Acne", 1), ("Common Cold", 1)]);
    }

    #[test]
    fn test_top_symptoms_are_truncated_by_frequency() {
        let stats = dataset().statistics(3);
        let top: Vec<(&str, usize)> = stats
            .top_symptoms
            .iter()
            .map(|c| (c.symptom.as_str(), c.occurrences))
            .collect();
        assert_eq!(top, vec![("chills", 3), ("high fever", 2), ("blackheads", 1)]);
    }
}

//! Precaution advice grouped by disease.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dataset::table::TableRow;

/// The join key for disease names: lowercase with whitespace collapsed.
pub fn disease_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PrecautionEntry {
    disease: String,
    precautions: Vec<String>,
}

/// Precaution lists keyed by [`disease_key`].
///
/// Lookups never fail: an unknown disease has no precautions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecautionBook {
    entries: HashMap<String, PrecautionEntry>,
    max_per_disease: usize,
}

impl PrecautionBook {
    /// Create an empty book keeping at most `max_per_disease` lines per disease.
    pub fn new(max_per_disease: usize) -> Self {
        PrecautionBook {
            entries: HashMap::new(),
            max_per_disease,
        }
    }

    /// Group table rows by disease. Rows with an empty label are ignored.
    pub fn from_rows(rows: &[TableRow], max_per_disease: usize) -> Self {
        let mut book = Self::new(max_per_disease);
        for row in rows {
            for value in &row.values {
                book.add(&row.label, value);
            }
            if !row.label.trim().is_empty() && row.values.is_empty() {
                book.ensure(&row.label);
            }
        }
        book
    }

    fn ensure(&mut self, disease: &str) -> &mut PrecautionEntry {
        self.entries
            .entry(disease_key(disease))
            .or_insert_with(|| PrecautionEntry {
                disease: disease.trim().to_string(),
                precautions: Vec::new(),
            })
    }

    /// Append one precaution line; blank, repeated or over-limit lines are dropped.
    pub fn add(&mut self, disease: &str, precaution: &str) {
        let precaution = precaution.trim();
        if disease.trim().is_empty() || precaution.is_empty() {
            return;
        }
        let max = self.max_per_disease;
        let entry = self.ensure(disease);
        if entry.precautions.len() < max && !entry.precautions.iter().any(|p| p == precaution) {
            entry.precautions.push(precaution.to_string());
        }
    }

    /// The precautions for `disease`, in source order.
    pub fn get(&self, disease: &str) -> &[String] {
        self.entries
            .get(&disease_key(disease))
            .map(|e| e.precautions.as_slice())
            .unwrap_or(&[])
    }

    /// Whether any row named `disease`.
    pub fn contains(&self, disease: &str) -> bool {
        self.entries.contains_key(&disease_key(disease))
    }

    /// Disease names as written in the precaution table, sorted.
    pub fn diseases(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(|e| e.disease.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of diseases with a row in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

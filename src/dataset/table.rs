//! Variable-width CSV tables.
//!
//! Rows are read as sequences of cells rather than fixed records: short rows
//! simply have fewer values, trailing empty cells are absent, and cells past
//! the header width are kept as values.
//!
//! ```csv
//! Disease,Symptom_1,Symptom_2,Symptom_3
//! Malaria,chills,vomiting,high_fever
//! Common Cold,chills,fatigue
//! ```

use std::io::Read;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SymptomaticError};

/// Which columns of a table carry the label and which carry values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    /// Header of the label column, matched case-insensitively.
    pub label_column: String,
    /// Header prefix of value columns, matched case-insensitively.
    /// `None` makes every non-label column a value column.
    pub value_column_prefix: Option<String>,
}

impl TableLayout {
    /// Create a layout.
    pub fn new<S: Into<String>>(label_column: S, value_column_prefix: Option<&str>) -> Self {
        TableLayout {
            label_column: label_column.into(),
            value_column_prefix: value_column_prefix.map(str::to_string),
        }
    }

    fn is_value_column(&self, header: &str) -> bool {
        match &self.value_column_prefix {
            Some(prefix) => header
                .trim()
                .to_lowercase()
                .starts_with(&prefix.trim().to_lowercase()),
            None => true,
        }
    }
}

/// One data row: its label and its non-empty value cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based line number in the source, for diagnostics.
    pub line: u64,
    /// Trimmed label cell (may be empty; callers decide what to do).
    pub label: String,
    /// Trimmed, non-empty value cells in column order.
    pub values: Vec<String>,
}

/// Read all data rows of a table.
///
/// `name` is only used in error messages.
pub fn read_table<R: Read>(
    source: R,
    layout: &TableLayout,
    delimiter: char,
    name: &str,
) -> Result<Vec<TableRow>> {
    if !delimiter.is_ascii() {
        return Err(SymptomaticError::config(format!(
            "delimiter must be an ASCII character, got {delimiter:?}"
        )));
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| SymptomaticError::data_load(format!("{name}: failed to read header: {e}")))?
        .clone();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(SymptomaticError::data_load(format!("{name}: missing header row")));
    }

    let wanted = layout.label_column.trim().to_lowercase();
    let label_index = headers
        .iter()
        .position(|h| h.trim().to_lowercase() == wanted)
        .ok_or_else(|| {
            SymptomaticError::data_load(format!(
                "{name}: no '{}' column in header",
                layout.label_column
            ))
        })?;

    let value_columns: Vec<bool> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| i != label_index && layout.is_value_column(h))
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| SymptomaticError::data_load(format!("{name}: malformed row: {e}")))?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let label = record.get(label_index).unwrap_or_default().to_string();
        let values = record
            .iter()
            .enumerate()
            .filter(|(i, _)| value_columns.get(*i).copied().unwrap_or(true))
            .map(|(_, cell)| cell)
            .filter(|cell| !cell.is_empty())
            .map(str::to_string)
            .collect();

        rows.push(TableRow {
            line,
            label,
            values,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> TableLayout {
        TableLayout::new("Disease", Some("Symptom"))
    }

    #[test]
    fn test_ragged_rows() {
        let csv = "Disease,Symptom_1,Symptom_2,Symptom_3\n\
                   Malaria,chills,vomiting,high_fever\n\
                   Common Cold,chills\n\
                   Typhoid, fatigue ,,\n";
        let rows = read_table(csv.as_bytes(), &layout(), ',', "symptoms").unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].values, vec!["chills", "vomiting", "high_fever"]);
        assert_eq!(rows[1].label, "Common Cold");
        assert_eq!(rows[1].values, vec!["chills"]);
        assert_eq!(rows[2].values, vec!["fatigue"]);
    }

    #[test]
    fn test_extra_cells_are_values() {
        let csv = "Disease,Symptom_1\nMalaria,chills,vomiting\n";
        let rows = read_table(csv.as_bytes(), &layout(), ',', "symptoms").unwrap();
        assert_eq!(rows[0].values, vec!["chills", "vomiting"]);
    }

    #[test]
    fn test_non_matching_columns_ignored() {
        let csv = "id,DISEASE,symptom_a,notes\n1,Malaria,chills,seasonal\n";
        let rows = read_table(csv.as_bytes(), &layout(), ',', "symptoms").unwrap();
        assert_eq!(rows[0].label, "Malaria");
        assert_eq!(rows[0].values, vec!["chills"]);
    }

    #[test]
    fn test_without_prefix_all_columns_are_values() {
        let csv = "Disease,a,b\nMalaria,chills,vomiting\n";
        let layout = TableLayout::new("Disease", None);
        let rows = read_table(csv.as_bytes(), &layout, ',', "symptoms").unwrap();
        assert_eq!(rows[0].values, vec!["chills", "vomiting"]);
    }

    #[test]
    fn test_missing_label_column() {
        let csv = "Illness,Symptom_1\nMalaria,chills\n";
        let result = read_table(csv.as_bytes(), &layout(), ',', "symptoms");
        assert!(matches!(result, Err(SymptomaticError::DataLoad(_))));
    }

    #[test]
    fn test_empty_source() {
        let result = read_table("".as_bytes(), &layout(), ',', "symptoms");
        assert!(matches!(result, Err(SymptomaticError::DataLoad(_))));
    }

    #[test]
    fn test_custom_delimiter() {
        let csv = "Disease\tSymptom_1\nMalaria\tchills\n";
        let rows = read_table(csv.as_bytes(), &layout(), '\t', "symptoms").unwrap();
        assert_eq!(rows[0].values, vec!["chills"]);
    }
}

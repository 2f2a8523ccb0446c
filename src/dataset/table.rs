use std::collections::HashMap;
use std::path::Path;

use crate::models::TrackRecord;

use super::clean::{clean_numeric_columns, CleanReport};

/// Errors raised while reading the dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// An in-memory view of the delimited dataset.
///
/// Cells are kept as the raw strings read from disk; the cleaning pass adds
/// numeric views for columns where every non-empty cell parses as a float
/// (comma decimal separators accepted).
#[derive(Debug)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    numeric: HashMap<String, Vec<f64>>,
    report: CleanReport,
}

impl DataTable {
    /// Reads a comma-delimited file with a header row and runs the
    /// cleaning pass over it.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self::from_rows(headers, rows))
    }

    /// Builds a table from already-parsed cells, running the cleaning pass.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let (numeric, report) = clean_numeric_columns(&headers, &rows);
        Self {
            headers,
            rows,
            numeric,
            report,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Raw cell at (row, column-name), if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Numeric view of a column, present only when the cleaning pass
    /// promoted it.
    pub fn numeric_column(&self, name: &str) -> Option<&[f64]> {
        self.numeric.get(name).map(Vec::as_slice)
    }

    /// Outcome of the cleaning pass, per column.
    pub fn clean_report(&self) -> &CleanReport {
        &self.report
    }

    /// Assembles the displayable record for a row. Missing columns render
    /// as empty strings; only an out-of-range row yields `None`.
    pub fn record(&self, row: usize) -> Option<TrackRecord> {
        if row >= self.rows.len() {
            return None;
        }
        let field = |name: &str| self.cell(row, name).unwrap_or_default().to_string();
        Some(TrackRecord {
            track_id: field("track_id"),
            track_name: field("track_name"),
            artists: field("artists"),
            track_genre: field("track_genre"),
            popularity: field("popularity"),
        })
    }
}

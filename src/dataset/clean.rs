use std::collections::HashMap;

/// Result of attempting to promote one column to a numeric view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnOutcome {
    /// Every non-empty cell parsed; the column gained a numeric view.
    Converted,
    /// No cell parsed (or the column is empty); left textual.
    Unchanged,
    /// Some cells parsed and some did not. The column stays textual and
    /// nothing is half-converted.
    Partial { parsed: usize, failed: usize },
}

/// Per-column outcomes of a cleaning pass, in header order.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    columns: Vec<(String, ColumnOutcome)>,
}

impl CleanReport {
    pub fn outcome(&self, column: &str) -> Option<&ColumnOutcome> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, outcome)| outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnOutcome)> {
        self.columns
            .iter()
            .map(|(name, outcome)| (name.as_str(), outcome))
    }

    /// Columns that mixed numeric and non-numeric cells.
    pub fn partial_columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter_map(|(name, outcome)| {
            matches!(outcome, ColumnOutcome::Partial { .. }).then_some(name.as_str())
        })
    }
}

/// Attempts to reinterpret textual columns as floating point, accepting a
/// comma as the decimal separator.
///
/// A column is promoted only when every non-empty cell parses; empty cells
/// become NaN in the numeric view. Columns that parse partially or not at
/// all keep their textual form, and the report says which is which.
pub fn clean_numeric_columns(
    headers: &[String],
    rows: &[Vec<String>],
) -> (HashMap<String, Vec<f64>>, CleanReport) {
    let mut numeric = HashMap::new();
    let mut report = CleanReport::default();

    for (col, header) in headers.iter().enumerate() {
        let mut values = Vec::with_capacity(rows.len());
        let mut parsed = 0usize;
        let mut failed = 0usize;

        for row in rows {
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            if cell.trim().is_empty() {
                values.push(f64::NAN);
                continue;
            }
            match parse_comma_decimal(cell) {
                Some(value) => {
                    parsed += 1;
                    values.push(value);
                }
                None => failed += 1,
            }
        }

        let outcome = match (parsed, failed) {
            (0, _) => ColumnOutcome::Unchanged,
            (_, 0) => {
                numeric.insert(header.clone(), values);
                ColumnOutcome::Converted
            }
            (parsed, failed) => ColumnOutcome::Partial { parsed, failed },
        };
        report.columns.push((header.clone(), outcome));
    }

    (numeric, report)
}

/// Parses a cell as f64, treating `,` as the decimal separator.
fn parse_comma_decimal(cell: &str) -> Option<f64> {
    cell.trim().replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn rows(cells: &[&[&str]]) -> Vec<Vec<String>> {
        cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_comma_decimal_column_is_converted() {
        let headers = headers(&["popularity"]);
        let rows = rows(&[&["81,5"], &["90"], &["0,25"]]);

        let (numeric, report) = clean_numeric_columns(&headers, &rows);

        assert_eq!(report.outcome("popularity"), Some(&ColumnOutcome::Converted));
        assert_eq!(numeric["popularity"], vec![81.5, 90.0, 0.25]);
    }

    #[test]
    fn test_text_column_is_left_unchanged() {
        let headers = headers(&["artists"]);
        let rows = rows(&[&["Ed Sheeran"], &["Dua Lipa"]]);

        let (numeric, report) = clean_numeric_columns(&headers, &rows);

        assert_eq!(report.outcome("artists"), Some(&ColumnOutcome::Unchanged));
        assert!(!numeric.contains_key("artists"));
    }

    #[test]
    fn test_mixed_column_is_reported_partial_and_stays_textual() {
        let headers = headers(&["track_genre"]);
        let rows = rows(&[&["12"], &["acoustic"], &["7,5"]]);

        let (numeric, report) = clean_numeric_columns(&headers, &rows);

        assert_eq!(
            report.outcome("track_genre"),
            Some(&ColumnOutcome::Partial { parsed: 2, failed: 1 })
        );
        assert!(!numeric.contains_key("track_genre"));
        assert_eq!(report.partial_columns().collect::<Vec<_>>(), vec!["track_genre"]);
    }

    #[test]
    fn test_empty_cells_become_nan_in_converted_column() {
        let headers = headers(&["popularity"]);
        let rows = rows(&[&["42"], &[""], &["17,2"]]);

        let (numeric, report) = clean_numeric_columns(&headers, &rows);

        assert_eq!(report.outcome("popularity"), Some(&ColumnOutcome::Converted));
        let values = &numeric["popularity"];
        assert_eq!(values[0], 42.0);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 17.2);
    }

    #[test]
    fn test_all_empty_column_is_unchanged() {
        let headers = headers(&["notes"]);
        let rows = rows(&[&[""], &[""]]);

        let (numeric, report) = clean_numeric_columns(&headers, &rows);

        assert_eq!(report.outcome("notes"), Some(&ColumnOutcome::Unchanged));
        assert!(!numeric.contains_key("notes"));
    }
}

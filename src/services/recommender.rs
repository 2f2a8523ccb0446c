use std::collections::HashSet;

use ndarray::Array1;
use thiserror::Error;

use crate::dataset::DataTable;
use crate::model::{ModelArtifacts, ModelError};
use crate::models::TrackRecord;

/// How many recommendations a query returns at most.
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Feature columns the pre-trained artifacts were fitted over, in order.
pub const FEATURE_COLUMNS: [&str; 2] = ["track_genre", "popularity"];

/// Error types for the recommendation pipeline.
///
/// A track that simply cannot be found is not an error; the query returns
/// an empty list for that. These cover mismatches between the dataset and
/// the artifacts, which the original system left as uncaught faults.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("dataset has no '{0}' column")]
    MissingColumn(&'static str),
    #[error("feature column '{0}' is not numeric after cleaning")]
    FeatureNotNumeric(&'static str),
    #[error("neighbor index {index} is outside the dataset ({rows} rows)")]
    RowOutOfRange { index: usize, rows: usize },
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Looks up a track in the dataset and queries the pre-trained artifacts
/// for its nearest neighbors.
pub struct Recommender<'a> {
    table: &'a DataTable,
    artifacts: &'a ModelArtifacts,
}

impl<'a> Recommender<'a> {
    pub fn new(table: &'a DataTable, artifacts: &'a ModelArtifacts) -> Self {
        Self { table, artifacts }
    }

    /// Finds the first row whose track name equals `track_name` exactly
    /// (case-insensitive) and whose artist field contains `artist_name`
    /// (case-insensitive). Inputs are expected pre-trimmed and lowercased.
    fn resolve(&self, track_name: &str, artist_name: &str) -> Option<usize> {
        (0..self.table.n_rows()).find(|&row| {
            let name_matches = self
                .table
                .cell(row, "track_name")
                .is_some_and(|name| name.to_lowercase() == track_name);
            name_matches
                && self
                    .table
                    .cell(row, "artists")
                    .is_some_and(|artists| artists.to_lowercase().contains(artist_name))
        })
    }

    /// Recommends up to `n_results` tracks near the given one.
    ///
    /// Returns an empty list when the (name, artist) pair does not resolve
    /// to any row. The resolved row's track_id is looked up again and the
    /// first row carrying that id supplies the feature values.
    pub fn recommend(
        &self,
        track_name: &str,
        artist_name: &str,
        n_results: usize,
    ) -> Result<Vec<TrackRecord>, RecommendError> {
        for column in ["track_id", "track_name", "artists"] {
            if self.table.column_index(column).is_none() {
                return Err(RecommendError::MissingColumn(column));
            }
        }

        let track_name = track_name.trim().to_lowercase();
        let artist_name = artist_name.trim().to_lowercase();

        let Some(row) = self.resolve(&track_name, &artist_name) else {
            return Ok(Vec::new());
        };

        let track_id = self.table.cell(row, "track_id").unwrap_or_default();
        let feature_row = (0..self.table.n_rows())
            .find(|&r| self.table.cell(r, "track_id") == Some(track_id))
            .unwrap_or(row);

        let mut features = Vec::with_capacity(FEATURE_COLUMNS.len());
        for column in FEATURE_COLUMNS {
            let values = self
                .table
                .numeric_column(column)
                .ok_or(RecommendError::FeatureNotNumeric(column))?;
            features.push(values[feature_row]);
        }
        let features = Array1::from_vec(features);

        let scaled = self.artifacts.scaler.transform(&features)?;
        let projected = self.artifacts.pca.transform(&scaled)?;
        let neighbors = self.artifacts.knn.kneighbors(&projected)?;

        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut recommendations = Vec::new();
        for neighbor in neighbors {
            let record =
                self.table
                    .record(neighbor.index)
                    .ok_or(RecommendError::RowOutOfRange {
                        index: neighbor.index,
                        rows: self.table.n_rows(),
                    })?;
            if seen.insert((record.track_name.clone(), record.artists.clone())) {
                recommendations.push(record);
            }
            if recommendations.len() == n_results {
                break;
            }
        }
        Ok(recommendations)
    }
}

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::ModelError;

/// A pre-built nearest-neighbor structure over the reduced feature space.
///
/// `points` holds one reduced vector per dataset row, in row order, so a
/// neighbor's index maps straight back to the table. The neighbor count is
/// fixed when the index is built, independent of how many results a caller
/// ultimately wants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnIndex {
    pub n_neighbors: usize,
    pub points: Vec<Vec<f64>>,
}

/// One hit from a nearest-neighbor query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub distance: f64,
}

impl KnnIndex {
    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        if self.n_neighbors == 0 {
            return Err(ModelError::Shape("knn index has n_neighbors = 0".to_string()));
        }
        if self.points.is_empty() {
            return Err(ModelError::Shape("knn index has no points".to_string()));
        }
        let dim = self.points[0].len();
        if dim == 0 {
            return Err(ModelError::Shape("knn index points have no dimensions".to_string()));
        }
        for (i, point) in self.points.iter().enumerate() {
            if point.len() != dim {
                return Err(ModelError::Shape(format!(
                    "knn point {} has {} dimensions, expected {}",
                    i,
                    point.len(),
                    dim
                )));
            }
        }
        Ok(())
    }

    /// Dimensionality of the stored points.
    pub fn dim(&self) -> usize {
        self.points.first().map(Vec::len).unwrap_or(0)
    }

    /// Returns the `n_neighbors` points closest to `query` under Euclidean
    /// distance, sorted ascending with ties broken by index.
    pub fn kneighbors(&self, query: &Array1<f64>) -> Result<Vec<Neighbor>, ModelError> {
        if query.len() != self.dim() {
            return Err(ModelError::Shape(format!(
                "knn index holds {}-dimensional points, query has {}",
                self.dim(),
                query.len()
            )));
        }

        let mut hits: Vec<Neighbor> = self
            .points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let sq_dist: f64 = point
                    .iter()
                    .zip(query.iter())
                    .map(|(p, q)| (p - q) * (p - q))
                    .sum();
                Neighbor {
                    index,
                    distance: sq_dist.sqrt(),
                }
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.index.cmp(&b.index))
        });
        hits.truncate(self.n_neighbors);
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn index() -> KnnIndex {
        KnnIndex {
            n_neighbors: 3,
            points: vec![vec![0.0], vec![10.0], vec![1.0], vec![5.0]],
        }
    }

    #[test]
    fn test_kneighbors_sorts_by_distance() {
        let hits = index().kneighbors(&array![0.0]).unwrap();

        let indices: Vec<usize> = hits.iter().map(|h| h.index).collect();
        assert_eq!(indices, vec![0, 2, 3]);
        assert_eq!(hits[0].distance, 0.0);
        assert_eq!(hits[1].distance, 1.0);
    }

    #[test]
    fn test_kneighbors_returns_at_most_n_neighbors() {
        let hits = index().kneighbors(&array![4.9]).unwrap();
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_kneighbors_breaks_ties_by_index() {
        let knn = KnnIndex {
            n_neighbors: 2,
            points: vec![vec![1.0], vec![-1.0], vec![3.0]],
        };

        let hits = knn.kneighbors(&array![0.0]).unwrap();

        // Points 0 and 1 are equidistant; the lower index wins.
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[1].index, 1);
    }

    #[test]
    fn test_kneighbors_handles_fewer_points_than_n_neighbors() {
        let knn = KnnIndex {
            n_neighbors: 10,
            points: vec![vec![0.0], vec![1.0]],
        };

        let hits = knn.kneighbors(&array![0.5]).unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_kneighbors_rejects_wrong_dimension() {
        let result = index().kneighbors(&array![0.0, 1.0]);
        assert!(matches!(result, Err(ModelError::Shape(_))));
    }

    #[test]
    fn test_validate_rejects_ragged_points() {
        let knn = KnnIndex {
            n_neighbors: 1,
            points: vec![vec![0.0, 1.0], vec![2.0]],
        };
        assert!(matches!(knn.validate(), Err(ModelError::Shape(_))));
    }
}

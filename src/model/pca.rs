use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::ModelError;

/// A fitted linear projection into a lower-dimensional space.
///
/// Components are stored one row per output dimension; the transform is
/// `components · (x - mean)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pca {
    pub mean: Vec<f64>,
    pub components: Vec<Vec<f64>>,
}

impl Pca {
    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        if self.components.is_empty() {
            return Err(ModelError::Shape("pca has no components".to_string()));
        }
        for (i, row) in self.components.iter().enumerate() {
            if row.len() != self.mean.len() {
                return Err(ModelError::Shape(format!(
                    "pca component {} has {} entries but mean has {}",
                    i,
                    row.len(),
                    self.mean.len()
                )));
            }
        }
        Ok(())
    }

    /// Number of input features the projection expects.
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Number of output dimensions.
    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// Projects a feature vector into the reduced space.
    pub fn transform(&self, features: &Array1<f64>) -> Result<Array1<f64>, ModelError> {
        if features.len() != self.mean.len() {
            return Err(ModelError::Shape(format!(
                "pca expects {} features, got {}",
                self.mean.len(),
                features.len()
            )));
        }
        let flat: Vec<f64> = self.components.iter().flatten().copied().collect();
        let components = Array2::from_shape_vec((self.components.len(), self.mean.len()), flat)
            .map_err(|e| ModelError::Shape(e.to_string()))?;
        let centered = features - &Array1::from_vec(self.mean.clone());
        Ok(components.dot(&centered))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_transform_projects_through_components() {
        let pca = Pca {
            mean: vec![1.0, 1.0],
            components: vec![vec![1.0, 0.0], vec![0.0, 2.0]],
        };

        let projected = pca.transform(&array![3.0, 2.0]).unwrap();

        assert_eq!(projected, array![2.0, 2.0]);
    }

    #[test]
    fn test_transform_reduces_dimensionality() {
        let pca = Pca {
            mean: vec![0.0, 0.0],
            components: vec![vec![0.6, 0.8]],
        };

        let projected = pca.transform(&array![1.0, 1.0]).unwrap();

        assert_eq!(projected.len(), 1);
        assert!((projected[0] - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_ragged_components() {
        let pca = Pca {
            mean: vec![0.0, 0.0],
            components: vec![vec![1.0, 0.0], vec![1.0]],
        };

        assert!(matches!(pca.validate(), Err(ModelError::Shape(_))));
    }

    #[test]
    fn test_transform_rejects_wrong_dimension() {
        let pca = Pca {
            mean: vec![0.0, 0.0],
            components: vec![vec![1.0, 0.0]],
        };

        assert!(matches!(
            pca.transform(&array![1.0, 2.0, 3.0]),
            Err(ModelError::Shape(_))
        ));
    }
}

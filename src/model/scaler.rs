use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::ModelError;

/// A fitted mean/variance normalization transform.
///
/// Applies `(x - mean) / scale` element-wise, matching the statistics the
/// training process fitted over the feature columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        if self.mean.len() != self.scale.len() {
            return Err(ModelError::Shape(format!(
                "scaler mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if self.mean.is_empty() {
            return Err(ModelError::Shape("scaler has no features".to_string()));
        }
        if self.scale.iter().any(|s| *s == 0.0) {
            return Err(ModelError::Shape("scaler has a zero scale entry".to_string()));
        }
        Ok(())
    }

    /// Normalizes a feature vector.
    pub fn transform(&self, features: &Array1<f64>) -> Result<Array1<f64>, ModelError> {
        if features.len() != self.mean.len() {
            return Err(ModelError::Shape(format!(
                "scaler expects {} features, got {}",
                self.mean.len(),
                features.len()
            )));
        }
        let mean = Array1::from_vec(self.mean.clone());
        let scale = Array1::from_vec(self.scale.clone());
        Ok((features - &mean) / &scale)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn test_transform_centers_and_scales() {
        let scaler = StandardScaler {
            mean: vec![2.0, 50.0],
            scale: vec![1.0, 10.0],
        };

        let scaled = scaler.transform(&array![3.0, 70.0]).unwrap();

        assert_eq!(scaled, array![1.0, 2.0]);
    }

    #[test]
    fn test_transform_rejects_wrong_dimension() {
        let scaler = StandardScaler {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 1.0],
        };

        let result = scaler.transform(&array![1.0]);

        assert!(matches!(result, Err(ModelError::Shape(_))));
    }

    #[test]
    fn test_validate_rejects_zero_scale() {
        let scaler = StandardScaler {
            mean: vec![0.0],
            scale: vec![0.0],
        };

        assert!(matches!(scaler.validate(), Err(ModelError::Shape(_))));
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let scaler = StandardScaler {
            mean: vec![0.0, 1.0],
            scale: vec![1.0],
        };

        assert!(matches!(scaler.validate(), Err(ModelError::Shape(_))));
    }
}

//! Pre-trained model artifacts.
//!
//! The scaler, PCA projection, and KNN index are produced by an external
//! training process and stored as JSON files in a models directory. Each
//! artifact validates its shape when loaded; nothing here mutates them.

mod knn;
mod pca;
mod scaler;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

pub use knn::{KnnIndex, Neighbor};
pub use pca::Pca;
pub use scaler::StandardScaler;

pub const SCALER_FILE: &str = "scaler.json";
pub const PCA_FILE: &str = "pca.json";
pub const KNN_FILE: &str = "knn_index.json";

/// Errors raised while loading or applying the model artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model artifact {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid model artifact: {0}")]
    Shape(String),
}

/// The three fitted artifacts the recommendation pipeline runs through.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub scaler: StandardScaler,
    pub pca: Pca,
    pub knn: KnnIndex,
}

impl ModelArtifacts {
    /// Loads and validates all three artifacts from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let scaler: StandardScaler = read_artifact(&dir.join(SCALER_FILE))?;
        scaler.validate()?;

        let pca: Pca = read_artifact(&dir.join(PCA_FILE))?;
        pca.validate()?;

        let knn: KnnIndex = read_artifact(&dir.join(KNN_FILE))?;
        knn.validate()?;

        Ok(Self { scaler, pca, knn })
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModelError::Json {
        path: path.to_path_buf(),
        source,
    })
}

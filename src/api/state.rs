use std::path::PathBuf;

use crate::config::Config;

/// Shared application state
///
/// Holds the filesystem locations handlers read from. The dataset and the
/// model artifacts themselves are loaded per request, so state stays
/// immutable and cheap to clone.
#[derive(Clone, Debug)]
pub struct AppState {
    pub dataset_path: PathBuf,
    pub model_dir: PathBuf,
}

impl AppState {
    /// Creates state from the application config
    pub fn new(config: &Config) -> Self {
        Self {
            dataset_path: config.dataset_path(),
            model_dir: config.model_dir(),
        }
    }

    /// Creates state from explicit paths (used by the test harness)
    pub fn with_paths(dataset_path: PathBuf, model_dir: PathBuf) -> Self {
        Self {
            dataset_path,
            model_dir,
        }
    }
}

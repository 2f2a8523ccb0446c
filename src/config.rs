use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the dataset file and the models subdirectory
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Dataset file name within the data directory
    #[serde(default = "default_dataset_file")]
    pub dataset_file: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_dataset_file() -> String {
    "dataset.csv".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Path to the dataset file
    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(&self.dataset_file)
    }

    /// Directory the model artifacts are read from
    pub fn model_dir(&self) -> PathBuf {
        self.data_dir.join("models")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let config = Config {
            host: default_host(),
            port: default_port(),
            data_dir: PathBuf::from("/srv/tunematch"),
            dataset_file: "tracks.csv".to_string(),
        };

        assert_eq!(config.dataset_path(), PathBuf::from("/srv/tunematch/tracks.csv"));
        assert_eq!(config.model_dir(), PathBuf::from("/srv/tunematch/models"));
    }
}

use std::path::{Path, PathBuf};

use crate::artifact::ArtifactManager;
use crate::classifier::{Classifier, ClassifierError};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_INTENTS_PATH: &str = "data/intents.json";

/// Settings needed to start the HTTP service
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON file holding the intent table; a missing file means no intents
    pub intents_path: PathBuf,
    /// Directory checked for the placeholder model artifact
    pub artifacts_dir: PathBuf,
    /// Fixed seed for reproducible confidences and fallbacks
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            intents_path: PathBuf::from(DEFAULT_INTENTS_PATH),
            artifacts_dir: ArtifactManager::get_default_artifacts_dir(),
            seed: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Loads the intent table and builds the classifier described by this config
    pub fn build_classifier(&self) -> Result<Classifier, ClassifierError> {
        build_classifier(&self.intents_path, self.seed)
    }

    pub fn artifact_manager(&self) -> ArtifactManager {
        ArtifactManager::new(&self.artifacts_dir)
    }
}

/// Builds a classifier from a table file, optionally seeded
pub fn build_classifier(intents_path: &Path, seed: Option<u64>) -> Result<Classifier, ClassifierError> {
    let mut builder = Classifier::builder();
    if let Some(seed) = seed {
        builder = builder.with_seed(seed);
    }
    Ok(builder.with_table_file(intents_path)?.build())
}

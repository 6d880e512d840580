use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// File name of the model artifact inside the artifacts directory
pub const ARTIFACT_FILE_NAME: &str = "intent_model_v1.bin";

/// SHA-256 of the empty placeholder artifact
pub const PLACEHOLDER_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Hash mismatch: expected {expected}, got {actual} for {path}")]
    HashMismatch {
        path: String,
        expected: String,
        actual: String,
    },
}

/// What currently sits at the artifact path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactStatus {
    Missing,
    Placeholder,
    Custom { sha256: String },
}

impl ArtifactStatus {
    /// Whether any artifact file is present
    pub fn is_loaded(&self) -> bool {
        !matches!(self, Self::Missing)
    }
}

/// Manages the placeholder model artifact.
///
/// Classification never reads the artifact; the service only reports whether
/// one is present. Creating it is a deployment step (`init-artifact`), never a
/// side effect of starting the server.
#[derive(Debug, Clone)]
pub struct ArtifactManager {
    artifacts_dir: PathBuf,
}

impl ArtifactManager {
    /// Creates an ArtifactManager rooted at the default artifacts directory
    pub fn new_default() -> Self {
        Self::new(Self::get_default_artifacts_dir())
    }

    /// Returns the default artifacts directory path
    pub fn get_default_artifacts_dir() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var("INTENT_CLASSIFIER_CACHE") {
            return PathBuf::from(path).join("model");
        }

        // 2. Use platform-specific cache directory
        if let Some(cache_dir) = dirs::cache_dir() {
            return cache_dir.join("intent-classifier").join("model");
        }

        // 3. Fallback to user's home directory
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(".cache").join("intent-classifier").join("model");
        }

        // 4. If all else fails, use system temp directory (platform agnostic)
        env::temp_dir().join("intent-classifier").join("model")
    }

    pub fn new<P: AsRef<Path>>(artifacts_dir: P) -> Self {
        Self {
            artifacts_dir: artifacts_dir.as_ref().to_path_buf(),
        }
    }

    pub fn artifacts_dir(&self) -> &Path {
        &self.artifacts_dir
    }

    pub fn get_artifact_path(&self) -> PathBuf {
        self.artifacts_dir.join(ARTIFACT_FILE_NAME)
    }

    pub fn is_artifact_present(&self) -> bool {
        self.get_artifact_path().exists()
    }

    /// Inspects the artifact path without modifying anything
    pub fn status(&self) -> Result<ArtifactStatus, ArtifactError> {
        let path = self.get_artifact_path();
        if !path.exists() {
            return Ok(ArtifactStatus::Missing);
        }
        let hash = Self::file_sha256(&path)?;
        if hash == PLACEHOLDER_SHA256 {
            Ok(ArtifactStatus::Placeholder)
        } else {
            Ok(ArtifactStatus::Custom { sha256: hash })
        }
    }

    /// Writes the empty placeholder artifact.
    ///
    /// An existing artifact is kept unless `fresh` is set. Returns whether a
    /// new file was written.
    pub fn init_placeholder(&self, fresh: bool) -> Result<bool, ArtifactError> {
        let path = self.get_artifact_path();

        if fresh {
            log::info!("Fresh artifact requested - removing any existing file...");
            self.remove_artifact()?;
        } else if path.exists() {
            log::info!("Artifact already present at {:?}, leaving it in place", path);
            return Ok(false);
        }

        log::info!("Creating artifact directory at {:?}", self.artifacts_dir);
        fs::create_dir_all(&self.artifacts_dir)?;
        fs::write(&path, b"")?;

        // Verify after writing
        let actual = Self::file_sha256(&path)?;
        if actual != PLACEHOLDER_SHA256 {
            return Err(ArtifactError::HashMismatch {
                path: path.display().to_string(),
                expected: PLACEHOLDER_SHA256.to_string(),
                actual,
            });
        }

        log::info!("Placeholder artifact created at {:?}", path);
        Ok(true)
    }

    pub fn remove_artifact(&self) -> Result<(), ArtifactError> {
        let path = self.get_artifact_path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn file_sha256(path: &Path) -> Result<String, ArtifactError> {
        let bytes = fs::read(path)?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }
}

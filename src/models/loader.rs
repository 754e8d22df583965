//! Artifact loader for the trained scaler and model.
//!
//! Both artifacts are deserialized once at process start. A failure here
//! is a deployment error, not a transient condition: there is no retry,
//! and no prediction path is reachable afterwards.

use crate::config::ArtifactsConfig;
use crate::models::linear::LinearModel;
use crate::models::scaler::StandardScaler;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Why an artifact could not be loaded.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact file does not exist at the configured path.
    #[error("artifact file not found: {0:?}")]
    Missing(PathBuf),

    /// The artifact file exists but is unreadable, undeserializable, or
    /// inconsistent with the feature contract.
    #[error("artifact file {path:?} is unreadable or corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

/// Loader for the persisted scaler and model artifacts.
pub struct ArtifactLoader;

impl ArtifactLoader {
    /// Load both artifacts from their configured paths.
    ///
    /// Returns the (scaler, model) pair, validated against the
    /// 6-feature contract.
    pub fn load(config: &ArtifactsConfig) -> Result<(StandardScaler, LinearModel), ArtifactError> {
        let scaler = Self::load_scaler(&config.scaler_path)?;
        let model = Self::load_model(&config.model_path)?;
        Ok((scaler, model))
    }

    /// Load and validate the scaler artifact.
    pub fn load_scaler<P: AsRef<Path>>(path: P) -> Result<StandardScaler, ArtifactError> {
        let path = path.as_ref();
        let scaler: StandardScaler = Self::load_json(path)?;

        scaler.validate().map_err(|reason| ArtifactError::Corrupt {
            path: path.to_path_buf(),
            reason,
        })?;

        info!(path = %path.display(), "Scaler artifact loaded");
        Ok(scaler)
    }

    /// Load and validate the model artifact.
    pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LinearModel, ArtifactError> {
        let path = path.as_ref();
        let model: LinearModel = Self::load_json(path)?;

        model.validate().map_err(|reason| ArtifactError::Corrupt {
            path: path.to_path_buf(),
            reason,
        })?;

        info!(path = %path.display(), "Model artifact loaded");
        Ok(model)
    }

    /// Read and deserialize one artifact file, distinguishing a missing
    /// file from a present-but-corrupt one.
    fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ArtifactError::Missing(path.to_path_buf())
            } else {
                ArtifactError::Corrupt {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| ArtifactError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_scaler_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");

        let err = ArtifactLoader::load_scaler(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Missing(_)));
    }

    #[test]
    fn test_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linear_model.json");

        let err = ArtifactLoader::load_model(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Missing(_)));
    }

    #[test]
    fn test_corrupt_artifact_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "scaler.json", "not json at all {{{");

        let err = ArtifactLoader::load_scaler(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Corrupt { .. }));
    }

    #[test]
    fn test_dimension_mismatch_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "scaler.json",
            r#"{"mean": [1.0, 2.0], "scale": [1.0, 1.0]}"#,
        );

        let err = ArtifactLoader::load_scaler(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Corrupt { .. }));
    }

    #[test]
    fn test_load_valid_pair() {
        let dir = tempfile::tempdir().unwrap();
        let scaler_path = write_file(
            &dir,
            "scaler.json",
            r#"{"mean": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
                "scale": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0]}"#,
        );
        let model_path = write_file(
            &dir,
            "linear_model.json",
            r#"{"coefficients": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0], "intercept": 2.0}"#,
        );

        let config = ArtifactsConfig {
            scaler_path: scaler_path.to_string_lossy().into_owned(),
            model_path: model_path.to_string_lossy().into_owned(),
        };

        let result = ArtifactLoader::load(&config);
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_error_message_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");

        let err = ArtifactLoader::load_scaler(&path).unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("scaler.json"));
    }
}

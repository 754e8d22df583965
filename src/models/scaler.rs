//! Feature scaling artifact.
//!
//! Mirrors the standardization fitted during training: each feature is
//! shifted by its training mean and divided by its training scale.

use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::models::pipeline::PredictionError;
use serde::{Deserialize, Serialize};

/// A fitted numeric transform applied to raw features before prediction.
pub trait Scaler: Send + Sync {
    /// Transform a raw feature vector into the normalized space the
    /// model was trained in.
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, PredictionError>;
}

/// Mean/variance standardization with parameters fixed at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-feature training mean
    mean: Vec<f64>,
    /// Per-feature training scale (standard deviation)
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Build a scaler from fitted parameters.
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }

    /// Check the fitted parameters against the feature contract.
    ///
    /// Run once at load time so a mismatched artifact is rejected before
    /// any input is accepted.
    pub fn validate(&self) -> Result<(), String> {
        if self.mean.len() != FEATURE_COUNT {
            return Err(format!(
                "scaler mean has {} entries, expected {}",
                self.mean.len(),
                FEATURE_COUNT
            ));
        }
        if self.scale.len() != FEATURE_COUNT {
            return Err(format!(
                "scaler scale has {} entries, expected {}",
                self.scale.len(),
                FEATURE_COUNT
            ));
        }
        if self.scale.iter().any(|&s| s == 0.0 || !s.is_finite()) {
            return Err("scaler scale contains zero or non-finite entries".to_string());
        }
        Ok(())
    }
}

impl Scaler for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> Result<FeatureVector, PredictionError> {
        if features.len() != self.mean.len() {
            return Err(PredictionError::ShapeMismatch {
                actual: features.len(),
                expected: self.mean.len(),
            });
        }

        let scaled: Vec<f64> = features
            .as_slice()
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect();

        if scaled.iter().any(|v| !v.is_finite()) {
            return Err(PredictionError::NonFinite);
        }

        Ok(FeatureVector::from_values(scaled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_standardizes() {
        let scaler = StandardScaler::new(
            vec![10.0, 10.0, 10.0, 10.0, 10.0, 10.0],
            vec![2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
        );
        let raw = FeatureVector::from_values(vec![12.0, 8.0, 10.0, 14.0, 6.0, 10.0]);

        let scaled = scaler.transform(&raw).unwrap();

        assert_eq!(scaled.as_slice(), &[1.0, -1.0, 0.0, 2.0, -2.0, 0.0]);
    }

    #[test]
    fn test_transform_rejects_wrong_shape() {
        let scaler = StandardScaler::new(vec![0.0; 6], vec![1.0; 6]);
        let raw = FeatureVector::from_values(vec![1.0, 2.0, 3.0]);

        let err = scaler.transform(&raw).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::ShapeMismatch {
                actual: 3,
                expected: 6
            }
        ));
    }

    #[test]
    fn test_zero_scale_rejected_at_validation() {
        let scaler = StandardScaler::new(vec![0.0; 6], vec![1.0, 1.0, 0.0, 1.0, 1.0, 1.0]);
        assert!(scaler.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_dimension() {
        let scaler = StandardScaler::new(vec![0.0; 4], vec![1.0; 4]);
        assert!(scaler.validate().is_err());
    }

    #[test]
    fn test_scaler_deserializes_training_export() {
        let json = r#"{"mean": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
                       "scale": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0]}"#;
        let scaler: StandardScaler = serde_json::from_str(json).unwrap();
        assert!(scaler.validate().is_ok());
    }
}

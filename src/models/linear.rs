//! Regression model artifact.
//!
//! The trained model is a linear regressor exported by the training
//! pipeline as coefficients plus intercept.

use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::models::pipeline::PredictionError;
use serde::{Deserialize, Serialize};

/// A fitted regression function mapping normalized features to a scalar
/// delivery-time estimate in days.
pub trait Regressor: Send + Sync {
    /// Predict delivery time (days) from a normalized feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;
}

/// Linear regression with weights fixed at training time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Per-feature weights
    coefficients: Vec<f64>,
    /// Bias term
    intercept: f64,
}

impl LinearModel {
    /// Build a model from fitted parameters.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Check the fitted parameters against the feature contract.
    pub fn validate(&self) -> Result<(), String> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "model has {} coefficients, expected {}",
                self.coefficients.len(),
                FEATURE_COUNT
            ));
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err("model parameters contain non-finite values".to_string());
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictionError::ShapeMismatch {
                actual: features.len(),
                expected: self.coefficients.len(),
            });
        }

        let days: f64 = features
            .as_slice()
            .iter()
            .zip(self.coefficients.iter())
            .map(|(&x, &w)| x * w)
            .sum::<f64>()
            + self.intercept;

        if !days.is_finite() {
            return Err(PredictionError::NonFinite);
        }

        Ok(days)
    }
}

//! Prediction pipeline: features in, estimated days out.
//!
//! Stateless per invocation. The scaler and model are loaded once and
//! held as read-only state for the life of the process; the pipeline
//! takes them as injected trait objects so tests can substitute mocks.

use crate::config::ArtifactsConfig;
use crate::features::FeatureExtractor;
use crate::models::linear::Regressor;
use crate::models::loader::{ArtifactError, ArtifactLoader};
use crate::models::scaler::Scaler;
use crate::types::prediction::Prediction;
use crate::types::shipment::Shipment;
use thiserror::Error;
use tracing::debug;

/// Why a single prediction attempt failed.
///
/// Terminal for the invocation that raised it, not for the process: the
/// pipeline stays available for another attempt.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// Feature vector length does not match the artifact dimension.
    #[error("feature vector has {actual} values, artifacts expect {expected}")]
    ShapeMismatch { actual: usize, expected: usize },

    /// Transform or predict produced a NaN or infinite value.
    #[error("prediction produced a non-finite value")]
    NonFinite,
}

/// Inference pipeline over the loaded scaler and model artifacts.
pub struct PredictionPipeline {
    scaler: Box<dyn Scaler>,
    model: Box<dyn Regressor>,
    extractor: FeatureExtractor,
}

impl PredictionPipeline {
    /// Build a pipeline from already-loaded artifacts.
    pub fn new(scaler: Box<dyn Scaler>, model: Box<dyn Regressor>) -> Self {
        Self {
            scaler,
            model,
            extractor: FeatureExtractor::new(),
        }
    }

    /// Load both artifacts from their configured paths and build the
    /// pipeline. Fails before any input is accepted if either artifact
    /// is missing or corrupt.
    pub fn from_artifacts(config: &ArtifactsConfig) -> Result<Self, ArtifactError> {
        let (scaler, model) = ArtifactLoader::load(config)?;
        Ok(Self::new(Box::new(scaler), Box::new(model)))
    }

    /// Predict the delivery time for one shipment.
    ///
    /// Assembles the fixed-order feature vector, applies the scaler
    /// transform, runs the model, and returns the estimated days.
    pub fn predict(&self, shipment: &Shipment) -> Result<Prediction, PredictionError> {
        let raw = self.extractor.extract(shipment);
        let scaled = self.scaler.transform(&raw)?;
        let days = self.model.predict(&scaled)?;

        let prediction = Prediction::new(days);
        debug!(
            prediction_id = %prediction.prediction_id,
            days = days,
            "Prediction complete"
        );

        Ok(prediction)
    }
}

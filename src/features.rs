//! Feature vector assembly for delivery time model inference.
//!
//! The trained scaler and model were fitted against features in a fixed
//! column order; this module is the single place that order is defined.

use crate::types::shipment::Shipment;
use serde::{Deserialize, Serialize};

/// Number of features consumed by the scaler and model.
pub const FEATURE_COUNT: usize = 6;

/// Fixed-order numeric feature vector.
///
/// Slot order is a contract with the trained artifacts:
/// [customer_zip, product_weight, product_length, product_height,
/// product_width, seller_zip]. It must never change independently of
/// retraining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    /// Wrap raw feature values. Length is the caller's responsibility;
    /// the scaler and model verify it against [`FEATURE_COUNT`].
    pub fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Feature values in slot order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no slots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Extracts the model input features from a shipment.
///
/// Order matches the training pipeline's feature columns exactly.
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Create a new feature extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract features from a shipment in the trained column order.
    pub fn extract(&self, shipment: &Shipment) -> FeatureVector {
        FeatureVector(vec![
            shipment.customer_zip as f64,
            shipment.product_weight as f64,
            shipment.product_length as f64,
            shipment.product_height as f64,
            shipment.product_width as f64,
            shipment.seller_zip as f64,
        ])
    }

    /// Get the number of features produced.
    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Get feature names in slot order (matching training columns).
    pub fn feature_names(&self) -> Vec<&'static str> {
        vec![
            "customer_zip_code_prefix",
            "product_weight_g",
            "product_length_cm",
            "product_height_cm",
            "product_width_cm",
            "seller_zip_code_prefix",
        ]
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

//! Type definitions for the delivery time predictor

pub mod prediction;
pub mod shipment;

pub use prediction::Prediction;
pub use shipment::Shipment;

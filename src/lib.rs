//! Delivery Time Predictor Library
//!
//! Serves a previously trained delivery-time regression model behind a
//! simple form interface: six shipment attributes in, estimated days out.

pub mod config;
pub mod features;
pub mod form;
pub mod metrics;
pub mod models;
pub mod types;

pub use config::AppConfig;
pub use features::{FeatureExtractor, FeatureVector};
pub use models::loader::{ArtifactError, ArtifactLoader};
pub use models::pipeline::{PredictionError, PredictionPipeline};
pub use types::{prediction::Prediction, shipment::Shipment};

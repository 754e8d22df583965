//! Model artifacts and inference pipeline

pub mod linear;
pub mod loader;
pub mod pipeline;
pub mod scaler;

pub use linear::{LinearModel, Regressor};
pub use loader::ArtifactLoader;
pub use pipeline::PredictionPipeline;
pub use scaler::{Scaler, StandardScaler};

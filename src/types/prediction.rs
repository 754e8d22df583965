//! Prediction result data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of a single delivery time prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Unique prediction identifier (for log correlation)
    pub prediction_id: String,

    /// Estimated delivery time in days
    pub days: f64,

    /// When the prediction was made
    pub timestamp: DateTime<Utc>,
}

impl Prediction {
    /// Create a new prediction result.
    pub fn new(days: f64) -> Self {
        Self {
            prediction_id: uuid::Uuid::new_v4().to_string(),
            days,
            timestamp: Utc::now(),
        }
    }

    /// Predicted days formatted for display, always two decimal places.
    pub fn display_days(&self) -> String {
        format!("{:.2}", self.days)
    }
}

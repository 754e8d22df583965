//! Shipment data structures for delivery time estimation

use serde::{Deserialize, Serialize};

/// A shipment whose delivery time is to be estimated.
///
/// Field aliases match the column names of the training dataset so that
/// records exported from the training pipeline deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Customer zip code prefix (5 digits)
    #[serde(alias = "customer_zip_code_prefix")]
    pub customer_zip: u32,

    /// Product weight in grams
    #[serde(alias = "product_weight_g")]
    pub product_weight: u32,

    /// Product length in centimeters
    #[serde(alias = "product_length_cm")]
    pub product_length: u32,

    /// Product height in centimeters
    #[serde(alias = "product_height_cm")]
    pub product_height: u32,

    /// Product width in centimeters
    #[serde(alias = "product_width_cm")]
    pub product_width: u32,

    /// Seller zip code prefix (5 digits)
    #[serde(alias = "seller_zip_code_prefix")]
    pub seller_zip: u32,
}

impl Shipment {
    /// Create a shipment from the six form values.
    pub fn new(
        customer_zip: u32,
        product_weight: u32,
        product_length: u32,
        product_height: u32,
        product_width: u32,
        seller_zip: u32,
    ) -> Self {
        Self {
            customer_zip,
            product_weight,
            product_length,
            product_height,
            product_width,
            seller_zip,
        }
    }
}

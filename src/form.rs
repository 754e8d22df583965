//! Shipment input form.
//!
//! The widget layer owns bounds enforcement: each field carries a
//! documented min/max/step, and out-of-range input is rejected here,
//! before anything reaches the prediction pipeline.

use crate::types::shipment::Shipment;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Bounds and step for one numeric form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub label: &'static str,
    pub help: &'static str,
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

/// Customer zip code field, 5-digit prefix.
pub const CUSTOMER_ZIP: FieldSpec = FieldSpec {
    label: "Customer zip code",
    help: "Enter the 5-digit zip code of the customer",
    min: 1000,
    max: 99999,
    step: 1,
};

/// Product weight field, grams.
pub const PRODUCT_WEIGHT: FieldSpec = FieldSpec {
    label: "Product weight (g)",
    help: "Weight of the product being shipped",
    min: 1,
    max: 50000,
    step: 1,
};

/// Product length field, centimeters.
pub const PRODUCT_LENGTH: FieldSpec = FieldSpec {
    label: "Product length (cm)",
    help: "Length of the package",
    min: 1,
    max: 200,
    step: 1,
};

/// Product height field, centimeters.
pub const PRODUCT_HEIGHT: FieldSpec = FieldSpec {
    label: "Product height (cm)",
    help: "Height of the package",
    min: 1,
    max: 200,
    step: 1,
};

/// Product width field, centimeters.
pub const PRODUCT_WIDTH: FieldSpec = FieldSpec {
    label: "Product width (cm)",
    help: "Width of the package",
    min: 1,
    max: 200,
    step: 1,
};

/// Seller zip code field, 5-digit prefix.
pub const SELLER_ZIP: FieldSpec = FieldSpec {
    label: "Seller zip code",
    help: "Enter the 5-digit zip code of the seller",
    min: 1000,
    max: 99999,
    step: 1,
};

/// All form fields in display (and feature) order.
pub const FIELDS: [FieldSpec; 6] = [
    CUSTOMER_ZIP,
    PRODUCT_WEIGHT,
    PRODUCT_LENGTH,
    PRODUCT_HEIGHT,
    PRODUCT_WIDTH,
    SELLER_ZIP,
];

/// Why a field value was rejected by the widget.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{label} must be a whole number")]
    NotANumber { label: &'static str },

    #[error("{label} must be between {min} and {max}")]
    OutOfRange {
        label: &'static str,
        min: u32,
        max: u32,
    },
}

impl FieldSpec {
    /// Validate raw input against this field's bounds.
    ///
    /// Step is 1 for every field, so whole-number parsing already
    /// enforces it.
    pub fn validate(&self, input: &str) -> Result<u32, FieldError> {
        let value: u32 = input
            .trim()
            .parse()
            .map_err(|_| FieldError::NotANumber { label: self.label })?;

        if value < self.min || value > self.max {
            return Err(FieldError::OutOfRange {
                label: self.label,
                min: self.min,
                max: self.max,
            });
        }

        Ok(value)
    }
}

/// Interactive form that reads the six shipment fields.
pub struct ShipmentForm;

impl ShipmentForm {
    /// Prompt for every field in order and return the completed
    /// shipment. Invalid input is rejected with a field-specific message
    /// and the field is asked again. Returns `None` when input ends.
    pub fn read_shipment<R: BufRead, W: Write>(
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<Option<Shipment>> {
        let mut values = [0u32; 6];

        for (slot, field) in FIELDS.iter().enumerate() {
            match Self::read_field(field, reader, writer)? {
                Some(value) => values[slot] = value,
                None => return Ok(None),
            }
        }

        Ok(Some(Shipment::new(
            values[0], values[1], values[2], values[3], values[4], values[5],
        )))
    }

    /// Prompt for a single field until a valid value arrives or input
    /// ends.
    fn read_field<R: BufRead, W: Write>(
        field: &FieldSpec,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<Option<u32>> {
        loop {
            write!(
                writer,
                "{} [{}-{}]: ",
                field.label, field.min, field.max
            )?;
            writer.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match field.validate(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(writer, "{} ({})", e, field.help)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_weight_bounds_accepted() {
        assert_eq!(PRODUCT_WEIGHT.validate("1"), Ok(1));
        assert_eq!(PRODUCT_WEIGHT.validate("50000"), Ok(50000));
    }

    #[test]
    fn test_weight_above_max_rejected() {
        let err = PRODUCT_WEIGHT.validate("50001").unwrap_err();
        assert!(matches!(err, FieldError::OutOfRange { max: 50000, .. }));
    }

    #[test]
    fn test_zip_below_min_rejected() {
        let err = CUSTOMER_ZIP.validate("999").unwrap_err();
        assert!(matches!(err, FieldError::OutOfRange { min: 1000, .. }));
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(matches!(
            PRODUCT_LENGTH.validate("abc"),
            Err(FieldError::NotANumber { .. })
        ));
        assert!(matches!(
            PRODUCT_LENGTH.validate("12.5"),
            Err(FieldError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(SELLER_ZIP.validate("  90001 \n"), Ok(90001));
    }

    #[test]
    fn test_form_reads_complete_shipment() {
        let mut input = Cursor::new("10001\n500\n20\n10\n15\n90001\n");
        let mut output = Vec::new();

        let shipment = ShipmentForm::read_shipment(&mut input, &mut output)
            .unwrap()
            .unwrap();

        assert_eq!(shipment, Shipment::new(10001, 500, 20, 10, 15, 90001));
    }

    #[test]
    fn test_form_reprompts_on_invalid_value() {
        // First weight is out of range; the corrected value follows.
        let mut input = Cursor::new("10001\n50001\n500\n20\n10\n15\n90001\n");
        let mut output = Vec::new();

        let shipment = ShipmentForm::read_shipment(&mut input, &mut output)
            .unwrap()
            .unwrap();

        assert_eq!(shipment.product_weight, 500);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("must be between 1 and 50000"));
    }

    #[test]
    fn test_form_returns_none_on_eof() {
        let mut input = Cursor::new("10001\n500\n");
        let mut output = Vec::new();

        let result = ShipmentForm::read_shipment(&mut input, &mut output).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_fields_cover_all_six_slots() {
        assert_eq!(FIELDS.len(), 6);
        assert_eq!(FIELDS[0].label, CUSTOMER_ZIP.label);
        assert_eq!(FIELDS[5].label, SELLER_ZIP.label);
    }
}

pub mod engine;
pub mod jurisdiction;
pub mod property;

use rust_decimal::Decimal;

pub use engine::{
    compute_fair_price, compute_stamp_duty, compute_total_building_area, quote, PriceResult,
};
pub use jurisdiction::Jurisdiction;
pub use property::{FloorPlan, PropertyInput};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },
    #[error("unknown jurisdiction: '{0}' (expected one of VIC, NSW, QLD, SA, WA, TAS, NT, ACT)")]
    UnknownJurisdiction(String),
}

impl PricingError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        PricingError::invalid(field, "value is required")
    }
}

/// `a * b`, or InvalidInput on `field` when the product does not fit a `Decimal`
pub fn checked_mul(field: &str, a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_mul(b)
        .ok_or_else(|| PricingError::invalid(field, "value too large"))
}

/// `a + b`, or InvalidInput on `field` when the sum does not fit a `Decimal`
pub fn checked_add(field: &str, a: Decimal, b: Decimal) -> Result<Decimal, PricingError> {
    a.checked_add(b)
        .ok_or_else(|| PricingError::invalid(field, "value too large"))
}

/// Reject zero and negative values for `field`
pub fn ensure_positive(field: &str, value: Decimal) -> Result<Decimal, PricingError> {
    if value > Decimal::ZERO {
        Ok(value)
    } else {
        Err(PricingError::invalid(
            field,
            format!("must be greater than zero, got {value}"),
        ))
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A compartment size class with dimensions and hourly pricing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub size_id: i64,
    pub name: String,
    #[serde(default)]
    pub width_cm: f64,
    #[serde(default)]
    pub height_cm: f64,
    #[serde(default)]
    pub depth_cm: f64,
    #[serde(default, deserialize_with = "super::lenient_decimal")]
    pub price_per_hour: Option<Decimal>,
}

/// Payload for creating or replacing a size. The backend rejects duplicate
/// names with 409, which the console surfaces as a dedicated dialog.
#[derive(Clone, Debug, Serialize, Validate)]
pub struct SizePayload {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: String,
    pub price_per_hour: Decimal,
    #[validate(range(min = 0.0, message = "Width must not be negative"))]
    pub width_cm: f64,
    #[validate(range(min = 0.0, message = "Height must not be negative"))]
    pub height_cm: f64,
    #[validate(range(min = 0.0, message = "Depth must not be negative"))]
    pub depth_cm: f64,
}

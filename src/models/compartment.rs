use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Occupancy state of a single compartment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(try_from = "u8", into = "u8")]
pub enum CompartmentStatus {
    #[strum(serialize = "occupied")]
    Occupied,
    #[strum(serialize = "available")]
    Available,
    #[strum(serialize = "maintenance")]
    Maintenance,
}

impl From<CompartmentStatus> for u8 {
    fn from(status: CompartmentStatus) -> Self {
        match status {
            CompartmentStatus::Occupied => 0,
            CompartmentStatus::Available => 1,
            CompartmentStatus::Maintenance => 2,
        }
    }
}

impl TryFrom<u8> for CompartmentStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CompartmentStatus::Occupied),
            1 => Ok(CompartmentStatus::Available),
            2 => Ok(CompartmentStatus::Maintenance),
            other => Err(format!("invalid compartment status: {}", other)),
        }
    }
}

/// Locker summary embedded in compartment responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompartmentLocker {
    pub code: String,
    #[serde(default)]
    pub location: Option<CompartmentLocation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompartmentLocation {
    pub name: String,
}

/// Size summary embedded in compartment responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompartmentSize {
    pub name: String,
    #[serde(default, deserialize_with = "super::lenient_decimal")]
    pub price_per_hour: Option<Decimal>,
}

/// An individually rentable slot within a locker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Compartment {
    pub compartment_id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub locker_id: Option<i64>,
    #[serde(default)]
    pub size_id: Option<i64>,
    pub status: CompartmentStatus,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub locker: Option<CompartmentLocker>,
    #[serde(default)]
    pub size: Option<CompartmentSize>,
}

/// Payload for creating a compartment.
#[derive(Clone, Debug, Serialize, Validate)]
pub struct CompartmentPayload {
    #[validate(length(min = 1, max = 50, message = "Code must not be empty"))]
    pub code: String,
    pub locker_id: i64,
    pub size_id: i64,
    pub status: CompartmentStatus,
}

/// Partial update for a compartment; absent fields stay untouched.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CompartmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locker_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CompartmentStatus>,
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Lifecycle state of a rental.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(try_from = "u8", into = "u8")]
pub enum RentalStatus {
    #[strum(serialize = "completed")]
    Completed,
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "cancelled")]
    Cancelled,
}

impl From<RentalStatus> for u8 {
    fn from(status: RentalStatus) -> Self {
        match status {
            RentalStatus::Completed => 0,
            RentalStatus::Active => 1,
            RentalStatus::Cancelled => 2,
        }
    }
}

impl TryFrom<u8> for RentalStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RentalStatus::Completed),
            1 => Ok(RentalStatus::Active),
            2 => Ok(RentalStatus::Cancelled),
            other => Err(format!("invalid rental status: {}", other)),
        }
    }
}

/// User summary embedded in rental responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalUser {
    pub user_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Compartment summary embedded in rental responses, carrying the owning
/// locker one level deeper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalCompartment {
    pub compartment_id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub locker: Option<RentalLocker>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalLocker {
    #[serde(default)]
    pub locker_id: Option<i64>,
    pub code: String,
}

/// A time-bounded occupancy of a compartment by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub rent_id: i64,
    pub user_id: i64,
    pub compartment_id: i64,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pickup_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::lenient_decimal")]
    pub price_per_hour: Option<Decimal>,
    #[serde(default, deserialize_with = "super::lenient_decimal")]
    pub total_cost: Option<Decimal>,
    pub status: RentalStatus,
    #[serde(default)]
    pub rental_type: Option<String>,
    #[serde(default)]
    pub receiver_phone: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub payment_status: Option<i64>,
    #[serde(default)]
    pub user: Option<RentalUser>,
    #[serde(default)]
    pub compartment: Option<RentalCompartment>,
}

impl Rental {
    pub fn is_active(&self) -> bool {
        self.status == RentalStatus::Active
    }
}

/// Payload for opening a rental on a compartment.
#[derive(Clone, Debug, Serialize, Validate)]
pub struct RentalPayload {
    pub user_id: i64,
    pub compartment_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_type: Option<String>,
    #[validate(range(min = 1, max = 720, message = "Rental hours must be between 1 and 720"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_phone: Option<String>,
}

/// Payload for a delivery rental addressed to a receiver by phone.
#[derive(Clone, Debug, Serialize, Validate)]
pub struct DeliveryPayload {
    pub compartment_id: i64,
    #[validate(length(min = 10, max = 11, message = "Receiver phone must have 10-11 digits"))]
    pub receiver_phone: String,
}

/// Identifier returned when a delivery rental is created.
#[derive(Clone, Debug, Deserialize)]
pub struct DeliveryCreated {
    pub rent_id: i64,
}

/// Result of accepting a delivery: the receiver is handed a payment URL.
#[derive(Clone, Debug, Deserialize)]
pub struct DeliveryAccepted {
    pub payment_url: String,
    #[serde(default, deserialize_with = "super::lenient_decimal")]
    pub total_cost: Option<Decimal>,
    pub rent_id: i64,
}

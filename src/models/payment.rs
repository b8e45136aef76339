use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settlement state of a payment. "Pending" is the marker that feeds the
/// per-customer pending-amount rollup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Failed,
}

/// Payment channel used to settle a rental.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Momo,
    Zalopay,
    Payos,
    Cash,
}

/// A settlement record attached to a rental.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub rent_id: i64,
    #[serde(default, deserialize_with = "super::lenient_decimal")]
    pub amount: Option<Decimal>,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(default)]
    pub payment_time: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }
}

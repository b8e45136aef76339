//! Wire-faithful domain records mirrored from the SmartBox backend.
//!
//! The client holds no identity or lifecycle for these beyond the current
//! in-memory list: every view re-fetches its collections in full, and writes
//! round-trip through the backend followed by a reload.

pub mod compartment;
pub mod location;
pub mod locker;
pub mod payment;
pub mod rental;
pub mod size;
pub mod user;

pub use compartment::{Compartment, CompartmentStatus};
pub use location::{District, Location, Province, Ward};
pub use locker::{Locker, LockerStats, LockerStatus};
pub use payment::{Payment, PaymentMethod, PaymentStatus};
pub use rental::{Rental, RentalStatus};
pub use size::{Size, SizePayload};
pub use user::{AccessGrant, Role, User, UserPayload, UserStatus};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Decodes a monetary amount that the backend may send as a JSON number, a
/// numeric string, null, or garbage. Anything non-numeric decodes to `None`
/// so sums never see a poisoned value.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => Decimal::from_str(&n.to_string()).ok(),
        Some(serde_json::Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    })
}

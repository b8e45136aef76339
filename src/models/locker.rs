use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use super::compartment::Compartment;

/// Operational state of a locker cabinet. The backend encodes this as a
/// closed integer set; out-of-range values are rejected at decode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(try_from = "u8", into = "u8")]
pub enum LockerStatus {
    #[strum(serialize = "inactive")]
    Inactive,
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "maintenance")]
    Maintenance,
}

impl From<LockerStatus> for u8 {
    fn from(status: LockerStatus) -> Self {
        match status {
            LockerStatus::Inactive => 0,
            LockerStatus::Active => 1,
            LockerStatus::Maintenance => 2,
        }
    }
}

impl TryFrom<u8> for LockerStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LockerStatus::Inactive),
            1 => Ok(LockerStatus::Active),
            2 => Ok(LockerStatus::Maintenance),
            other => Err(format!("invalid locker status: {}", other)),
        }
    }
}

/// Location summary embedded in locker responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LockerLocation {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// A physical cabinet containing rentable compartments, tied to a location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Locker {
    pub locker_id: i64,
    pub code: String,
    #[serde(default)]
    pub location_id: Option<i64>,
    pub status: LockerStatus,
    #[serde(default)]
    pub location: Option<LockerLocation>,
    #[serde(default)]
    pub compartments: Vec<Compartment>,
}

/// Fleet-wide compartment availability counters, as served by
/// `locker/stats` and as derived client-side when that endpoint fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockerStats {
    pub total_lockers: u64,
    pub active_lockers: u64,
    pub total_compartments: u64,
    pub available_compartments: u64,
    pub occupied_compartments: u64,
}

/// Payload for creating or updating a locker. `compartments` maps a size id
/// to the number of compartments to provision and only applies on create.
#[derive(Clone, Debug, Default, Serialize, Validate)]
pub struct LockerPayload {
    #[validate(length(min = 1, max = 50, message = "Code must not be empty"))]
    pub code: String,
    pub location_id: i64,
    pub status: LockerStatus,
    #[serde(default)]
    pub compartments: HashMap<String, u32>,
}

impl Default for LockerStatus {
    fn default() -> Self {
        LockerStatus::Active
    }
}

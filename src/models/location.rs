use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A place where lockers are installed. Administrative references use the
/// backend's capitalized column names, preserved via renames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "ProvinceId")]
    pub province_id: Option<i64>,
    #[serde(default, rename = "DistrictId")]
    pub district_id: Option<i64>,
    #[serde(default, rename = "WardId")]
    pub ward_id: Option<i64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Price multiplier applied to size base prices at this location.
    #[serde(default, deserialize_with = "super::lenient_decimal")]
    pub multiplier: Option<Decimal>,
    #[serde(default)]
    pub area_description: Option<String>,
    #[serde(default)]
    pub total_lockers: Option<u64>,
    #[serde(default)]
    pub active_lockers: Option<u64>,
    #[serde(default)]
    pub full_address: Option<String>,
    #[serde(default)]
    pub province: Option<Province>,
    #[serde(default)]
    pub district: Option<District>,
    #[serde(default)]
    pub ward: Option<Ward>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(default, rename = "ProvinceId")]
    pub province_id: Option<i64>,
    #[serde(rename = "ProvinceName")]
    pub province_name: String,
    #[serde(default, rename = "StateCode")]
    pub state_code: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct District {
    #[serde(default, rename = "DistrictId")]
    pub district_id: Option<i64>,
    #[serde(default, rename = "ProvinceId")]
    pub province_id: Option<i64>,
    #[serde(rename = "DistrictName")]
    pub district_name: String,
    #[serde(default, rename = "IsActive")]
    pub is_active: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    #[serde(default, rename = "WardId")]
    pub ward_id: Option<i64>,
    #[serde(default, rename = "DistrictId")]
    pub district_id: Option<i64>,
    #[serde(rename = "WardName")]
    pub ward_name: String,
    #[serde(default, rename = "IsActive")]
    pub is_active: Option<i64>,
}

/// Payload for creating or updating a location.
#[derive(Clone, Debug, Serialize, Validate)]
pub struct LocationPayload {
    #[validate(length(min = 1, max = 200, message = "Name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, max = 500, message = "Address must not be empty"))]
    pub address: String,
    #[serde(rename = "ProvinceId", skip_serializing_if = "Option::is_none")]
    pub province_id: Option<i64>,
    #[serde(rename = "DistrictId", skip_serializing_if = "Option::is_none")]
    pub district_id: Option<i64>,
    #[serde(rename = "WardId", skip_serializing_if = "Option::is_none")]
    pub ward_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub multiplier: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_description: Option<String>,
}

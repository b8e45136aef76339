use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10,11}$").unwrap());

/// Staff and customer roles. Admins and technicians operate the console;
/// customers only appear as rental owners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
    #[strum(serialize = "admin")]
    Admin,
    #[strum(serialize = "technician")]
    Technician,
    #[strum(serialize = "customer")]
    Customer,
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => 1,
            Role::Technician => 2,
            Role::Customer => 3,
        }
    }
}

impl TryFrom<u8> for Role {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Role::Admin),
            2 => Ok(Role::Technician),
            3 => Ok(Role::Customer),
            other => Err(format!("invalid role: {}", other)),
        }
    }
}

/// Account activation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(try_from = "u8", into = "u8")]
pub enum UserStatus {
    #[strum(serialize = "inactive")]
    Inactive,
    #[strum(serialize = "active")]
    Active,
}

impl From<UserStatus> for u8 {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Inactive => 0,
            UserStatus::Active => 1,
        }
    }
}

impl TryFrom<u8> for UserStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserStatus::Inactive),
            1 => Ok(UserStatus::Active),
            other => Err(format!("invalid user status: {}", other)),
        }
    }
}

/// An account known to the backend, customer or staff.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role_id: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    #[serde(default, deserialize_with = "super::lenient_decimal")]
    pub wallet: Option<Decimal>,
}

impl User {
    pub fn is_customer(&self) -> bool {
        self.role_id == Role::Customer
    }
}

/// Payload for creating a user account.
#[derive(Clone, Debug, Serialize, Validate)]
pub struct UserPayload {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: String,
    #[validate(regex(path = "PHONE_RE", message = "Phone number must have 10-11 digits"))]
    pub phone_number: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    pub password: String,
    pub role_id: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// Partial update for a user; absent fields keep their stored value,
/// including the password.
#[derive(Clone, Debug, Default, Serialize, Validate)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = "PHONE_RE", message = "Phone number must have 10-11 digits"))]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// A one-time access grant letting a receiver open a delivery compartment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccessGrant {
    pub id: i64,
    pub rent_id: i64,
    #[serde(default)]
    pub sender_id: Option<i64>,
    #[serde(default)]
    pub receiver_id: Option<i64>,
    #[serde(default)]
    pub receiver_phone: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_mapping_matches_backend_ids() {
        assert_eq!(Role::try_from(1).unwrap(), Role::Admin);
        assert_eq!(Role::try_from(2).unwrap(), Role::Technician);
        assert_eq!(Role::try_from(3).unwrap(), Role::Customer);
        assert!(Role::try_from(0).is_err());
    }

    #[test]
    fn user_payload_rejects_bad_phone_and_short_password() {
        let payload = UserPayload {
            name: "An".to_string(),
            phone_number: "12345".to_string(),
            email: "an@example.com".to_string(),
            password: "123".to_string(),
            role_id: Role::Customer,
            status: None,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone_number"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn user_payload_accepts_valid_input() {
        let payload = UserPayload {
            name: "An".to_string(),
            phone_number: "0912345678".to_string(),
            email: "an@example.com".to_string(),
            password: "secret123".to_string(),
            role_id: Role::Customer,
            status: Some(UserStatus::Active),
        };
        assert!(payload.validate().is_ok());
    }
}

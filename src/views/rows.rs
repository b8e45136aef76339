//! Row projection: flattening nested API records into the flat shapes the
//! console tables render.
//!
//! Projections are total functions. A missing nested reference becomes an
//! absent field that displays as a placeholder; nothing here can fail or
//! panic. Derived fields are copies taken at projection time, so they go
//! stale until the next reload.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::compartment::{Compartment, CompartmentStatus};
use crate::models::locker::{Locker, LockerStatus};
use crate::models::rental::{Rental, RentalStatus};
use crate::models::user::{Role, User, UserStatus};
use crate::views::filter::{FieldValue, FilterField, FilterKind};

/// Display marker for a missing nested reference.
pub const NOT_AVAILABLE: &str = "N/A";

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// A rental flattened for the rentals table and the dashboard's recent list.
#[derive(Clone, Debug, PartialEq)]
pub struct RentalRow {
    pub rent_id: i64,
    pub user_name: Option<String>,
    pub locker_code: Option<String>,
    pub compartment_code: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_cost: Option<Decimal>,
    pub status: RentalStatus,
}

impl RentalRow {
    pub fn project(rental: &Rental) -> Self {
        let compartment = rental.compartment.as_ref();
        Self {
            rent_id: rental.rent_id,
            user_name: rental.user.as_ref().map(|u| u.name.clone()),
            locker_code: compartment
                .and_then(|c| c.locker.as_ref())
                .map(|l| l.code.clone()),
            compartment_code: compartment.map(|c| c.code.clone()),
            start_time: rental.start_time,
            end_time: rental.end_time,
            total_cost: rental.total_cost,
            status: rental.status,
        }
    }

    pub fn user_display(&self) -> &str {
        self.user_name.as_deref().unwrap_or("")
    }

    pub fn locker_display(&self) -> &str {
        self.locker_code.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn compartment_display(&self) -> &str {
        self.compartment_code.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// The backend leaves the total unset until the rental closes.
    pub fn cost_display(&self) -> String {
        match self.total_cost {
            Some(cost) => format!("{} VND", cost),
            None => "pending".to_string(),
        }
    }

    pub fn start_display(&self) -> String {
        format_time(self.start_time)
    }

    pub fn end_display(&self) -> String {
        format_time(self.end_time)
    }
}

/// A compartment flattened for the compartments table.
#[derive(Clone, Debug, PartialEq)]
pub struct CompartmentRow {
    pub compartment_id: i64,
    pub code: String,
    pub locker_code: Option<String>,
    pub location_name: Option<String>,
    pub size_name: Option<String>,
    pub price_per_hour: Option<Decimal>,
    pub status: CompartmentStatus,
    pub is_open: bool,
}

impl CompartmentRow {
    pub fn project(compartment: &Compartment) -> Self {
        let locker = compartment.locker.as_ref();
        Self {
            compartment_id: compartment.compartment_id,
            code: compartment.code.clone(),
            locker_code: locker.map(|l| l.code.clone()),
            location_name: locker
                .and_then(|l| l.location.as_ref())
                .map(|loc| loc.name.clone()),
            size_name: compartment.size.as_ref().map(|s| s.name.clone()),
            price_per_hour: compartment.size.as_ref().and_then(|s| s.price_per_hour),
            status: compartment.status,
            is_open: compartment.is_open,
        }
    }

    pub fn locker_display(&self) -> &str {
        self.locker_code.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn location_display(&self) -> &str {
        self.location_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn size_display(&self) -> &str {
        self.size_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub const FILTER_FIELDS: &'static [FilterField<CompartmentRow>] = &[
        FilterField {
            name: "code",
            label: "Code",
            kind: FilterKind::Text,
            accessor: compartment_code,
        },
        FilterField {
            name: "locker",
            label: "Locker",
            kind: FilterKind::Select,
            accessor: compartment_locker,
        },
        FilterField {
            name: "location",
            label: "Location",
            kind: FilterKind::Select,
            accessor: compartment_location,
        },
        FilterField {
            name: "size",
            label: "Size",
            kind: FilterKind::Select,
            accessor: compartment_size,
        },
        FilterField {
            name: "status",
            label: "Status",
            kind: FilterKind::Select,
            accessor: compartment_status,
        },
    ];
}

fn compartment_code(row: &CompartmentRow) -> FieldValue {
    FieldValue::text(&row.code)
}

fn compartment_locker(row: &CompartmentRow) -> FieldValue {
    FieldValue::opt_text(row.locker_code.as_deref())
}

fn compartment_location(row: &CompartmentRow) -> FieldValue {
    FieldValue::opt_text(row.location_name.as_deref())
}

fn compartment_size(row: &CompartmentRow) -> FieldValue {
    FieldValue::opt_text(row.size_name.as_deref())
}

fn compartment_status(row: &CompartmentRow) -> FieldValue {
    FieldValue::Text(u8::from(row.status).to_string())
}

/// A locker flattened for the lockers table, with compartment counters
/// derived from the embedded list.
#[derive(Clone, Debug, PartialEq)]
pub struct LockerRow {
    pub locker_id: i64,
    pub code: String,
    pub location_name: Option<String>,
    pub status: LockerStatus,
    pub total_compartments: usize,
    pub available_compartments: usize,
}

impl LockerRow {
    pub fn project(locker: &Locker) -> Self {
        Self {
            locker_id: locker.locker_id,
            code: locker.code.clone(),
            location_name: locker.location.as_ref().map(|l| l.name.clone()),
            status: locker.status,
            total_compartments: locker.compartments.len(),
            available_compartments: locker
                .compartments
                .iter()
                .filter(|c| c.status == CompartmentStatus::Available)
                .count(),
        }
    }

    pub fn location_display(&self) -> &str {
        self.location_name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub const FILTER_FIELDS: &'static [FilterField<LockerRow>] = &[
        FilterField {
            name: "code",
            label: "Code",
            kind: FilterKind::Text,
            accessor: locker_code,
        },
        FilterField {
            name: "location",
            label: "Location",
            kind: FilterKind::Select,
            accessor: locker_location,
        },
        FilterField {
            name: "status",
            label: "Status",
            kind: FilterKind::Select,
            accessor: locker_status,
        },
    ];
}

fn locker_code(row: &LockerRow) -> FieldValue {
    FieldValue::text(&row.code)
}

fn locker_location(row: &LockerRow) -> FieldValue {
    FieldValue::opt_text(row.location_name.as_deref())
}

fn locker_status(row: &LockerRow) -> FieldValue {
    FieldValue::Text(u8::from(row.status).to_string())
}

/// A user flattened for the user management table.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    pub user_id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub created_at: Option<DateTime<Utc>>,
    pub status: Option<UserStatus>,
    pub wallet: Option<Decimal>,
}

impl UserRow {
    pub fn project(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name.clone(),
            phone: user.phone_number.clone(),
            email: user.email.clone(),
            role: user.role_id,
            created_at: user.created_at,
            status: user.status,
            wallet: user.wallet,
        }
    }

    pub fn created_display(&self) -> String {
        format_time(self.created_at)
    }
}

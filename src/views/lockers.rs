//! Rental usage overview: per-locker revenue and occupancy, with a view
//! mode and free-text search applied after the rollup.

use crate::errors::ApiError;
use crate::services::{LockerService, RentalService};
use crate::views::aggregate::{self, ActivityState, LockerUsage};

/// Which slice of the fleet the overview shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UsageMode {
    /// All lockers, ordered highest revenue first.
    #[default]
    RevenueFirst,
    ActiveOnly,
    LockedOnly,
}

/// Current overview inputs; applied as a pure function over the rollup.
#[derive(Clone, Debug, Default)]
pub struct UsageQuery {
    pub mode: UsageMode,
    pub search: String,
}

impl UsageQuery {
    /// Narrows and orders the usage rows. Search matches id, code or
    /// location, case-insensitively.
    pub fn apply(&self, rows: &[LockerUsage]) -> Vec<LockerUsage> {
        let needle = self.search.trim().to_lowercase();
        let mut out: Vec<LockerUsage> = rows
            .iter()
            .filter(|row| match self.mode {
                UsageMode::RevenueFirst => true,
                UsageMode::ActiveOnly => row.state == ActivityState::Active,
                UsageMode::LockedOnly => row.state == ActivityState::Locked,
            })
            .filter(|row| {
                if needle.is_empty() {
                    return true;
                }
                row.locker_id.to_string().contains(&needle)
                    || row.code.to_lowercase().contains(&needle)
                    || row
                        .location_name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        if self.mode == UsageMode::RevenueFirst {
            aggregate::sort_by_revenue(&mut out);
        }
        out
    }
}

/// Loads lockers and rentals concurrently and rolls rentals up per locker.
pub async fn load(
    lockers: &LockerService,
    rentals: &RentalService,
) -> Result<Vec<LockerUsage>, ApiError> {
    let (lockers, rentals) = tokio::try_join!(lockers.list(), rentals.list())?;
    Ok(aggregate::locker_usage(&lockers, &rentals))
}

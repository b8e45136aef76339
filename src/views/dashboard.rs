//! Landing view: fleet counters plus the most recent rentals.

use tracing::error;

use crate::models::locker::LockerStats;
use crate::services::{LockerService, RentalService};
use crate::views::rows::RentalRow;

/// How many rentals the recent-activity list shows.
const RECENT_LIMIT: usize = 5;

/// Everything the dashboard renders in one load.
#[derive(Clone, Debug, Default)]
pub struct Dashboard {
    pub stats: LockerStats,
    pub recent_rentals: Vec<RentalRow>,
}

/// Loads counters and recent activity concurrently. Either half failing
/// degrades to its zero value rather than blanking the whole screen; the
/// failure is logged and the rest still renders.
pub async fn load(lockers: &LockerService, rentals: &RentalService) -> Dashboard {
    let (stats, recent) = tokio::join!(lockers.stats(), rentals.list());

    let stats = stats.unwrap_or_else(|err| {
        error!(error = %err, "failed to load locker stats");
        LockerStats::default()
    });

    let recent_rentals = match recent {
        Ok(mut list) => {
            // Newest first; rentals without a start time sink to the end.
            list.sort_by(|a, b| b.start_time.cmp(&a.start_time));
            list.iter()
                .take(RECENT_LIMIT)
                .map(RentalRow::project)
                .collect()
        }
        Err(err) => {
            error!(error = %err, "failed to load recent rentals");
            Vec::new()
        }
    };

    Dashboard {
        stats,
        recent_rentals,
    }
}

//! Customer overview: one row per customer with rental status and payment
//! totals, searchable and filterable by rent status.

use crate::errors::ApiError;
use crate::models::rental::RentalStatus;
use crate::services::{PaymentService, RentalService, UserService};
use crate::views::aggregate::{self, CustomerSummary};

/// Current overview inputs.
#[derive(Clone, Debug, Default)]
pub struct CustomerQuery {
    pub search: String,
    pub rent_status: Option<RentalStatus>,
}

impl CustomerQuery {
    /// Narrows summaries by free text (id, name, phone) and rent status.
    /// The status filter only matches customers who have that status; rows
    /// with no rentals pass only when no status is selected.
    pub fn apply(&self, rows: &[CustomerSummary]) -> Vec<CustomerSummary> {
        let needle = self.search.trim().to_lowercase();
        rows.iter()
            .filter(|row| match self.rent_status {
                Some(wanted) => row.rent_status == Some(wanted),
                None => true,
            })
            .filter(|row| {
                if needle.is_empty() {
                    return true;
                }
                row.user_id.to_string().contains(&needle)
                    || row.name.to_lowercase().contains(&needle)
                    || row
                        .phone
                        .as_deref()
                        .is_some_and(|phone| phone.contains(&needle))
            })
            .cloned()
            .collect()
    }
}

/// Loads users, rentals and payments concurrently and joins them into
/// per-customer summaries.
pub async fn load(
    users: &UserService,
    rentals: &RentalService,
    payments: &PaymentService,
) -> Result<Vec<CustomerSummary>, ApiError> {
    let (users, rentals, payments) =
        tokio::try_join!(users.list(), rentals.list(), payments.list())?;
    Ok(aggregate::customer_summaries(&users, &rentals, &payments))
}

//! Client-side grouping and rollups.
//!
//! The backend offers no join endpoints, so the console stitches payments to
//! rentals and rentals to owners in memory: payments group by their rental,
//! rentals by their user or by the locker owning their compartment, and the
//! groups reduce to the totals the summary tables show. All of it is pure,
//! synchronous, single-pass work over already-fetched collections.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use crate::models::compartment::CompartmentStatus;
use crate::models::locker::{Locker, LockerStats, LockerStatus};
use crate::models::payment::Payment;
use crate::models::rental::{Rental, RentalStatus};
use crate::models::user::User;

/// Groups payments by their owning rental. Insertion order is preserved
/// within each group.
pub fn payments_by_rental(payments: &[Payment]) -> HashMap<i64, Vec<&Payment>> {
    let mut index: HashMap<i64, Vec<&Payment>> = HashMap::new();
    for payment in payments {
        index.entry(payment.rent_id).or_default().push(payment);
    }
    index
}

/// Groups rentals by their owning user.
pub fn rentals_by_user(rentals: &[Rental]) -> HashMap<i64, Vec<&Rental>> {
    let mut index: HashMap<i64, Vec<&Rental>> = HashMap::new();
    for rental in rentals {
        index.entry(rental.user_id).or_default().push(rental);
    }
    index
}

/// Per-customer rollup backing the customer overview table.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomerSummary {
    pub user_id: i64,
    pub name: String,
    pub phone: Option<String>,
    /// Status of the customer's active rental, else of their first one;
    /// `None` when they have no rentals at all.
    pub rent_status: Option<RentalStatus>,
    /// Code of the locker currently rented, read through the rental's
    /// embedded compartment and its locker.
    pub locker_code: Option<String>,
    /// Sum of the customer's payments still marked pending.
    pub pending_amount: Decimal,
    /// Sum of all the customer's payment amounts, regardless of status.
    pub total_spent: Decimal,
    pub wallet: Option<Decimal>,
}

impl CustomerSummary {
    pub fn rent_status_display(&self) -> &'static str {
        match self.rent_status {
            None => "none",
            Some(RentalStatus::Active) => "active",
            Some(RentalStatus::Completed) => "completed",
            Some(RentalStatus::Cancelled) => "cancelled",
        }
    }
}

/// Builds the two-level join: payments scope to a customer through that
/// customer's rentals. Only customers (role 3) get a row; a customer with no
/// rentals reports zero totals and no rent status.
pub fn customer_summaries(
    users: &[User],
    rentals: &[Rental],
    payments: &[Payment],
) -> Vec<CustomerSummary> {
    let by_user = rentals_by_user(rentals);
    let by_rental = payments_by_rental(payments);

    users
        .iter()
        .filter(|u| u.is_customer())
        .map(|user| {
            let rents: &[&Rental] = by_user
                .get(&user.user_id)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            let current = rents
                .iter()
                .find(|r| r.is_active())
                .or_else(|| rents.first())
                .copied();

            let locker_code = current
                .and_then(|r| r.compartment.as_ref())
                .and_then(|c| c.locker.as_ref())
                .map(|l| l.code.clone());

            let user_payments: Vec<&Payment> = rents
                .iter()
                .flat_map(|r| by_rental.get(&r.rent_id).into_iter().flatten())
                .copied()
                .collect();

            // Amounts that failed to decode as numbers are None and simply
            // drop out of both sums.
            let pending_amount = user_payments
                .iter()
                .filter(|p| p.is_pending())
                .filter_map(|p| p.amount)
                .sum();
            let total_spent = user_payments.iter().filter_map(|p| p.amount).sum();

            CustomerSummary {
                user_id: user.user_id,
                name: user.name.clone(),
                phone: user.phone_number.clone(),
                rent_status: current.map(|r| r.status),
                locker_code,
                pending_amount,
                total_spent,
                wallet: user.wallet,
            }
        })
        .collect()
}

/// Whether a locker is taking rentals or shown as locked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ActivityState {
    Active,
    Locked,
}

/// Per-locker rollup backing the rental usage overview.
#[derive(Clone, Debug, PartialEq)]
pub struct LockerUsage {
    pub locker_id: i64,
    pub code: String,
    pub location_name: Option<String>,
    pub state: ActivityState,
    pub available_compartments: usize,
    pub total_compartments: usize,
    /// Revenue over all rentals on this locker's compartments.
    pub revenue: Decimal,
    pub active_rentals: usize,
}

/// Rolls rentals up onto their owning lockers: a rental belongs to a locker
/// when its compartment is embedded in that locker's compartment list.
pub fn locker_usage(lockers: &[Locker], rentals: &[Rental]) -> Vec<LockerUsage> {
    lockers
        .iter()
        .map(|locker| {
            let compartment_ids: HashSet<i64> = locker
                .compartments
                .iter()
                .map(|c| c.compartment_id)
                .collect();
            let locker_rentals: Vec<&Rental> = rentals
                .iter()
                .filter(|r| compartment_ids.contains(&r.compartment_id))
                .collect();

            let revenue = locker_rentals.iter().filter_map(|r| r.total_cost).sum();
            let active_rentals = locker_rentals.iter().filter(|r| r.is_active()).count();
            let available_compartments = locker
                .compartments
                .iter()
                .filter(|c| c.status == CompartmentStatus::Available)
                .count();

            LockerUsage {
                locker_id: locker.locker_id,
                code: locker.code.clone(),
                location_name: locker.location.as_ref().map(|l| l.name.clone()),
                state: if locker.status == LockerStatus::Active {
                    ActivityState::Active
                } else {
                    ActivityState::Locked
                },
                available_compartments,
                total_compartments: locker.compartments.len(),
                revenue,
                active_rentals,
            }
        })
        .collect()
}

/// Orders usage rows highest revenue first; ties keep their relative order.
pub fn sort_by_revenue(rows: &mut [LockerUsage]) {
    rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
}

/// Derives the dashboard counters from the locker list, mirroring what the
/// backend's stats endpoint reports.
pub fn derive_locker_stats(lockers: &[Locker]) -> LockerStats {
    let mut stats = LockerStats::default();
    for locker in lockers {
        stats.total_lockers += 1;
        if locker.status == LockerStatus::Active {
            stats.active_lockers += 1;
        }
        for compartment in &locker.compartments {
            stats.total_compartments += 1;
            match compartment.status {
                CompartmentStatus::Available => stats.available_compartments += 1,
                CompartmentStatus::Occupied => stats.occupied_compartments += 1,
                CompartmentStatus::Maintenance => {}
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn locker(id: i64, status: u8, compartment_statuses: &[u8]) -> Locker {
        let compartments = compartment_statuses
            .iter()
            .enumerate()
            .map(|(i, s)| {
                serde_json::json!({"compartment_id": id * 100 + i as i64, "status": s})
            })
            .collect::<Vec<_>>();
        serde_json::from_value(serde_json::json!({
            "locker_id": id,
            "code": format!("LK-{:02}", id),
            "status": status,
            "compartments": compartments,
        }))
        .unwrap()
    }

    #[test]
    fn stats_derivation_counts_availability() {
        let lockers = vec![locker(1, 1, &[1, 0])];
        let stats = derive_locker_stats(&lockers);
        assert_eq!(stats.total_lockers, 1);
        assert_eq!(stats.active_lockers, 1);
        assert_eq!(stats.total_compartments, 2);
        assert_eq!(stats.available_compartments, 1);
        assert_eq!(stats.occupied_compartments, 1);
    }

    #[test]
    fn maintenance_compartments_count_only_toward_total() {
        let lockers = vec![locker(1, 0, &[2, 2])];
        let stats = derive_locker_stats(&lockers);
        assert_eq!(stats.active_lockers, 0);
        assert_eq!(stats.total_compartments, 2);
        assert_eq!(stats.available_compartments, 0);
        assert_eq!(stats.occupied_compartments, 0);
    }

    #[test]
    fn customer_totals_split_pending_from_spent() {
        let users: Vec<User> = serde_json::from_value(serde_json::json!([
            {"user_id": 1, "name": "An", "role_id": 3},
            {"user_id": 2, "name": "Staff", "role_id": 1}
        ]))
        .unwrap();
        let rentals: Vec<Rental> = serde_json::from_value(serde_json::json!([
            {"rent_id": 10, "user_id": 1, "compartment_id": 7, "status": 1,
             "compartment": {"compartment_id": 7, "code": "C-07",
                             "locker": {"code": "LK-03"}}},
            {"rent_id": 11, "user_id": 1, "compartment_id": 8, "status": 0}
        ]))
        .unwrap();
        let payments: Vec<Payment> = serde_json::from_value(serde_json::json!([
            {"payment_id": 1, "rent_id": 10, "amount": 100, "method": "cash",
             "status": "pending"},
            {"payment_id": 2, "rent_id": 11, "amount": 200, "method": "card",
             "status": "paid"},
            {"payment_id": 3, "rent_id": 99, "amount": 999, "method": "card",
             "status": "paid"}
        ]))
        .unwrap();

        let summaries = customer_summaries(&users, &rentals, &payments);
        // Only the customer gets a row; the staff account is skipped.
        assert_eq!(summaries.len(), 1);
        let row = &summaries[0];
        assert_eq!(row.pending_amount, dec!(100));
        assert_eq!(row.total_spent, dec!(300));
        assert_eq!(row.rent_status, Some(RentalStatus::Active));
        assert_eq!(row.rent_status_display(), "active");
        assert_eq!(row.locker_code.as_deref(), Some("LK-03"));
    }

    #[test]
    fn customer_without_rentals_reports_zero_totals() {
        let users: Vec<User> = serde_json::from_value(serde_json::json!([
            {"user_id": 1, "name": "An", "role_id": 3}
        ]))
        .unwrap();
        let summaries = customer_summaries(&users, &[], &[]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].total_spent, dec!(0));
        assert_eq!(summaries[0].pending_amount, dec!(0));
        assert_eq!(summaries[0].rent_status, None);
        assert_eq!(summaries[0].rent_status_display(), "none");
    }

    #[test]
    fn revenue_sort_is_descending() {
        let lockers = vec![locker(1, 1, &[1]), locker(2, 1, &[1])];
        let rentals: Vec<Rental> = vec![
            serde_json::from_value(serde_json::json!({
                "rent_id": 1, "user_id": 1, "compartment_id": 100,
                "status": 0, "total_cost": 500
            }))
            .unwrap(),
            serde_json::from_value(serde_json::json!({
                "rent_id": 2, "user_id": 1, "compartment_id": 200,
                "status": 1, "total_cost": 900
            }))
            .unwrap(),
        ];
        let mut usage = locker_usage(&lockers, &rentals);
        sort_by_revenue(&mut usage);
        assert_eq!(usage[0].locker_id, 2);
        assert_eq!(usage[0].revenue, dec!(900));
        assert_eq!(usage[0].active_rentals, 1);
        assert_eq!(usage[1].active_rentals, 0);
    }
}

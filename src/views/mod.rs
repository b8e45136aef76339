//! View-side computation: everything between fetched collections and the
//! rows a table renders. All of it is pure except the `load` entry points,
//! which fan out concurrent service calls.

pub mod aggregate;
pub mod customers;
pub mod dashboard;
pub mod filter;
pub mod lockers;
pub mod rows;

pub use aggregate::{CustomerSummary, LockerUsage};
pub use filter::{FilterField, FilterKind, FilterState, apply_filters};
pub use rows::{CompartmentRow, LockerRow, RentalRow, UserRow};

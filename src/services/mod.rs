//! Resource services over the REST backend.
//!
//! One service per resource family, each owning a shared [`ApiClient`].
//! Writes return the created or updated resource; the console reloads the
//! full collection afterward instead of patching its cached list.

pub mod addresses;
pub mod compartments;
pub mod lockers;
pub mod locations;
pub mod payments;
pub mod rentals;
pub mod sizes;
pub mod users;

pub use addresses::AddressService;
pub use compartments::CompartmentService;
pub use lockers::LockerService;
pub use locations::LocationService;
pub use payments::PaymentService;
pub use rentals::RentalService;
pub use sizes::SizeService;
pub use users::UserService;

//! Domain records and the payloads that create and change them.
//!
//! Records hold only their fields. The identifier is the store key and lives beside
//! the record, never inside it.

pub mod customer;
pub mod hotel;
pub mod reservation;

pub use customer::*;
pub use hotel::*;
pub use reservation::*;

//! # Customer Registry
//!
//! The customer registry owns the customers store. It is the simplest registry: no
//! dependencies (its context is `()`) and no custom actions, only create, display,
//! modify and delete.
//!
//! ## Structure
//!
//! - [`entity`] - [`RecordEntity`](record_actor::RecordEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use hotel_reservations::customer_registry;
//! use hotel_reservations::model::CustomerId;
//! use record_actor::{EntityClient, RecordStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let dir = tempfile::tempdir().unwrap();
//!     let records = RecordStore::new(dir.path());
//!     let (actor, client) = customer_registry::new(records, "customers.json", 32);
//!     tokio::spawn(actor.run(()));
//!
//!     assert!(client.create(CustomerId::from(1u32), "Ada", "ada@example.com").await);
//!     assert!(client.exists(CustomerId::from(1u32)).await);
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use record_actor::{RecordStore, RegistryActor};

/// Creates a new customer registry actor over `store` and its client.
pub fn new(
    records: RecordStore,
    store: &str,
    capacity: usize,
) -> (RegistryActor<Customer>, CustomerClient) {
    let (actor, generic_client) = RegistryActor::new(capacity, records, store);
    (actor, CustomerClient::new(generic_client))
}

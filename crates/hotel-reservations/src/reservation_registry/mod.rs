//! # Reservation Registry
//!
//! Owns the reservations store and coordinates with the customer and hotel registries.
//!
//! ## Structure
//!
//! - [`entity`] - [`RecordEntity`](record_actor::RecordEntity) implementation for
//!   [`Reservation`], with the cross-registry checks in its hooks
//! - [`error`] - [`ReservationError`], which wraps customer and hotel errors
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with `(CustomerClient, HotelClient)` as its context:
//!
//! ```rust,ignore
//! let (actor, reservations) = reservation_registry::new(records, "reservations.json", 32);
//! tokio::spawn(actor.run((customers.clone(), hotels.clone())));
//! ```
//!
//! ## Flow
//!
//! **Create** checks that the customer exists, then takes a room from the hotel, then
//! stores `{customer_id, hotel_id}`. A failed check leaves every store as it was.
//!
//! **Cancel** gives the room back to the hotel and removes the reservation. The
//! reservation is removed even if the hotel no longer exists.
//!
//! The three stores are separate files and are not updated atomically. If writing the
//! reservation fails after the room was taken, the room stays taken.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ReservationClient;
use crate::model::Reservation;
use record_actor::{RecordStore, RegistryActor};

/// Creates a new reservation registry actor over `store` and its client.
///
/// The dependencies are supplied later, when the actor is run.
pub fn new(
    records: RecordStore,
    store: &str,
    capacity: usize,
) -> (RegistryActor<Reservation>, ReservationClient) {
    let (actor, generic_client) = RegistryActor::new(capacity, records, store);
    (actor, ReservationClient::new(generic_client))
}

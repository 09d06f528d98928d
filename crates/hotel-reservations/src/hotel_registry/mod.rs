//! # Hotel Registry
//!
//! Owns the hotels store and the room inventory in it. Besides the usual create,
//! display, modify and delete, the registry exposes the inventory through custom
//! actions:
//!
//! ```rust,ignore
//! // Read the inventory without changing it
//! let free = hotel_client.rooms_available(hotel_id).await;
//!
//! // Take one room; fails when none are left
//! hotel_client.reserve_room(hotel_id).await;
//!
//! // Give one room back
//! hotel_client.cancel_reservation(hotel_id).await;
//! ```
//!
//! Each action is one request to the registry, so the availability check and the
//! decrement happen in the same load-save cycle. Two reservations racing for the
//! last room cannot both succeed.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::HotelClient;
use crate::model::Hotel;
use record_actor::{RecordStore, RegistryActor};

/// Creates a new hotel registry actor over `store` and its client.
pub fn new(
    records: RecordStore,
    store: &str,
    capacity: usize,
) -> (RegistryActor<Hotel>, HotelClient) {
    let (actor, generic_client) = RegistryActor::new(capacity, records, store);
    (actor, HotelClient::new(generic_client))
}

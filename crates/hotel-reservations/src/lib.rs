//! # Hotel Reservations
//!
//! Record keeping for a small hotel business: customers, hotels with a room inventory,
//! and reservations that tie a customer to a room. Each kind is kept in its own JSON
//! store and served by a registry built on [`record_actor`].
//!
//! - [`model`] - the stored records and their create/update payloads
//! - [`customer_registry`], [`hotel_registry`], [`reservation_registry`] - entity
//!   behavior and errors
//! - [`clients`] - the API callers use
//! - [`lifecycle`] - [`ReservationSystem`](lifecycle::ReservationSystem), which starts
//!   and wires everything
//! - [`config`] - where the stores live

pub mod clients;
pub mod config;
pub mod customer_registry;
pub mod hotel_registry;
pub mod lifecycle;
pub mod model;
pub mod reservation_registry;

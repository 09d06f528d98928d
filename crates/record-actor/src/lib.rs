//! # Record Actor
//!
//! Building blocks for registries of persisted records. A registry is an actor that owns
//! one JSON document on disk (a store) and serves create, get, list, update, delete and
//! custom action requests against it, one request at a time.
//!
//! ## Architecture Overview
//!
//! 1. **Storage Layer** ([`RecordStore`]) - named JSON documents of id-keyed records
//! 2. **Entity Layer** ([`RecordEntity`]) - your record type and its lifecycle hooks
//! 3. **Runtime Layer** ([`RegistryActor`]) - request processing against one store
//! 4. **Interface Layer** ([`RegistryClient`], [`EntityClient`]) - typed async handles
//!
//! Business rules are written once as entity hooks. The actor decodes the stored record,
//! calls the hook and writes the result back.
//!
//! ## Persistence
//!
//! Nothing is cached. Each request loads the whole store and each change writes the whole
//! store back, so external edits to a store file are visible on the next request. A store
//! that is missing or not valid JSON reads as empty.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`RegistryActor::run`], not to the constructor. A
//! reservation registry that checks customers and reserves hotel rooms runs with
//! `(CustomerClient, HotelClient)` as its context:
//!
//! ```rust
//! use record_actor::{RecordEntity, RecordStore, RegistryActor, RegistryClient};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//!
//! record_actor::record_id!(Room, Booking);
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)] struct Room { free: bool }
//! #[derive(Debug)] struct RoomCreate;
//! #[derive(Debug)] struct RoomUpdate;
//! #[derive(Debug)] enum RoomAction { Take }
//! #[derive(Debug, thiserror::Error)] #[error("room is taken")] struct RoomError;
//!
//! #[async_trait]
//! impl RecordEntity for Room {
//!     type Id = RoomId; type Create = RoomCreate; type Update = RoomUpdate; type Action = RoomAction;
//!     type ActionResult = (); type Context = (); type Error = RoomError;
//!     fn from_create_params(_: RoomId, _: RoomCreate) -> Result<Self, RoomError> { Ok(Self { free: true }) }
//!     async fn on_update(&mut self, _: RoomUpdate, _: &()) -> Result<(), RoomError> { Ok(()) }
//!     async fn handle_action(&mut self, _: RoomAction, _: &()) -> Result<(), RoomError> {
//!         if !self.free { return Err(RoomError); }
//!         self.free = false;
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)] struct Booking { room: RoomId }
//! #[derive(Debug)] struct BookingCreate { room: RoomId }
//! #[derive(Debug)] struct BookingUpdate;
//! #[derive(Debug)] enum BookingAction {}
//! #[derive(Debug, thiserror::Error)] #[error("room unavailable")] struct BookingError;
//!
//! #[async_trait]
//! impl RecordEntity for Booking {
//!     type Id = BookingId; type Create = BookingCreate; type Update = BookingUpdate;
//!     type Action = BookingAction; type ActionResult = ();
//!     type Context = RegistryClient<Room>;
//!     type Error = BookingError;
//!     fn from_create_params(_: BookingId, p: BookingCreate) -> Result<Self, BookingError> {
//!         Ok(Self { room: p.room })
//!     }
//!     async fn on_create(&mut self, rooms: &RegistryClient<Room>) -> Result<(), BookingError> {
//!         rooms.perform_action(self.room.clone(), RoomAction::Take).await.map_err(|_| BookingError)
//!     }
//!     async fn on_update(&mut self, _: BookingUpdate, _: &RegistryClient<Room>) -> Result<(), BookingError> { Ok(()) }
//!     async fn handle_action(&mut self, a: BookingAction, _: &RegistryClient<Room>) -> Result<(), BookingError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let dir = tempfile::tempdir().unwrap();
//!     let records = RecordStore::new(dir.path());
//!
//!     let (room_actor, rooms) = RegistryActor::<Room>::new(10, records.clone(), "rooms.json");
//!     let (booking_actor, bookings) = RegistryActor::<Booking>::new(10, records, "bookings.json");
//!     tokio::spawn(room_actor.run(()));
//!     tokio::spawn(booking_actor.run(rooms.clone()));
//!
//!     rooms.create(RoomId::from("101"), RoomCreate).await.unwrap();
//!     let first = BookingCreate { room: RoomId::from("101") };
//!     let second = BookingCreate { room: RoomId::from("101") };
//!     assert!(bookings.create(BookingId::from("a"), first).await.is_ok());
//!     assert!(bookings.create(BookingId::from("b"), second).await.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a [`RegistryClient`] from scripted expectations, so a
//! registry can be tested without the stores of the registries it depends on.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;
pub mod store;
pub mod telemetry;

// Re-export core types for convenience
pub use actor::RegistryActor;
pub use client::RegistryClient;
pub use client_trait::EntityClient;
pub use entity::RecordEntity;
pub use error::{RegistryError, StoreError};
pub use message::{RegistryRequest, Response};
pub use store::{Document, Record, RecordStore};

#[doc(hidden)]
pub use paste;
#[doc(hidden)]
pub use serde;

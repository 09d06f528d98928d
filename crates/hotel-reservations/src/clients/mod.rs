//! Domain clients.
//!
//! Each client wraps a [`RegistryClient`](record_actor::RegistryClient) and offers two
//! layers: total operations that log failures and answer with `bool` or `Option`, and
//! `try_*` operations that return the registry's typed error. Display, delete and list
//! come from [`EntityClient`](record_actor::EntityClient).

pub mod customer_client;
pub mod hotel_client;
pub mod reservation_client;

pub use customer_client::CustomerClient;
pub use hotel_client::HotelClient;
pub use reservation_client::ReservationClient;

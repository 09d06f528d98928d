//! Error types for the reservation registry.

use crate::customer_registry::CustomerError;
use crate::hotel_registry::HotelError;
use crate::model::{CustomerId, ReservationId};
use record_actor::RegistryError;
use thiserror::Error;

/// Errors that can occur during reservation operations.
#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("Reservation not found: {0}")]
    NotFound(ReservationId),

    /// The customer named by the reservation is not registered.
    #[error("Customer not registered: {0}")]
    UnknownCustomer(CustomerId),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    /// The hotel is missing or has no free room.
    #[error(transparent)]
    Hotel(#[from] HotelError),

    #[error("Reservation registry error: {0}")]
    Registry(#[source] RegistryError),
}

impl ReservationError {
    pub fn from_registry(e: RegistryError) -> Self {
        match e.into_entity_error::<Self>() {
            Ok(own) => own,
            Err(RegistryError::NotFound(id)) => Self::NotFound(id.into()),
            Err(other) => Self::Registry(other),
        }
    }
}

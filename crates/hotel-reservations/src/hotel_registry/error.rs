//! Error types for the hotel registry.

use crate::model::HotelId;
use record_actor::RegistryError;
use thiserror::Error;

/// Errors that can occur during hotel operations.
#[derive(Debug, Error)]
pub enum HotelError {
    #[error("Hotel not found: {0}")]
    NotFound(HotelId),

    #[error("Hotel already exists: {0}")]
    AlreadyExists(HotelId),

    /// The room count is negative or too large.
    #[error("Invalid room count for hotel {id}: {rooms}")]
    InvalidRoomCount { id: HotelId, rooms: i64 },

    #[error("No rooms available")]
    NoRoomsAvailable,

    /// The registry could not be reached, or its store could not be read or written.
    #[error("Hotel registry error: {0}")]
    Registry(#[source] RegistryError),
}

impl HotelError {
    pub fn from_registry(e: RegistryError) -> Self {
        match e.into_entity_error::<Self>() {
            Ok(own) => own,
            Err(RegistryError::NotFound(id)) => Self::NotFound(id.into()),
            Err(RegistryError::AlreadyExists(id)) => Self::AlreadyExists(id.into()),
            Err(other) => Self::Registry(other),
        }
    }
}

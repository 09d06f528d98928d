//! # Hotel Client
//!
//! Provides a high-level API for interacting with the hotel registry, including
//! the room inventory actions.
use crate::hotel_registry::{HotelAction, HotelActionResult, HotelError};
use crate::model::{Hotel, HotelCreate, HotelId, HotelUpdate};
use record_actor::{EntityClient, RegistryClient};
use tracing::{debug, error, instrument, warn};

/// Client for interacting with the hotel registry.
#[derive(Clone)]
pub struct HotelClient {
    inner: RegistryClient<Hotel>,
}

impl HotelClient {
    pub fn new(inner: RegistryClient<Hotel>) -> Self {
        Self { inner }
    }
}

impl EntityClient<Hotel> for HotelClient {
    fn inner(&self) -> &RegistryClient<Hotel> {
        &self.inner
    }
}

impl HotelClient {
    /// Registers a hotel with `rooms` free rooms.
    ///
    /// Returns `false` if the id is taken, `rooms` is negative or the store failed.
    #[instrument(skip(self))]
    pub async fn create(&self, id: HotelId, name: &str, location: &str, rooms: i64) -> bool {
        let params = HotelCreate {
            name: name.to_string(),
            location: location.to_string(),
            rooms,
        };
        match self.try_create(id, params).await {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, "Hotel not created");
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn modify(&self, id: HotelId, update: HotelUpdate) -> bool {
        match self.try_modify(id, update).await {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, "Hotel not modified");
                false
            }
        }
    }

    /// Takes one room. Returns `false` if the hotel is missing or full.
    #[instrument(skip(self))]
    pub async fn reserve_room(&self, id: HotelId) -> bool {
        match self.try_reserve_room(id).await {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, "Hotel not found or no rooms available");
                false
            }
        }
    }

    /// Gives one room back. Returns `false` if the hotel is missing.
    #[instrument(skip(self))]
    pub async fn cancel_reservation(&self, id: HotelId) -> bool {
        match self.try_cancel_reservation(id).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Room not returned");
                false
            }
        }
    }

    /// Check the current number of free rooms. `None` if the hotel is missing.
    #[instrument(skip(self))]
    pub async fn rooms_available(&self, id: HotelId) -> Option<u32> {
        debug!("Checking availability");
        match self
            .inner
            .perform_action(id, HotelAction::CheckAvailability)
            .await
        {
            Ok(HotelActionResult::CheckAvailability(rooms)) => Some(rooms),
            Ok(_) => unreachable!("CheckAvailability action must return CheckAvailability result"),
            Err(e) => {
                warn!(error = %e, "Availability unknown");
                None
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn try_create(
        &self,
        id: HotelId,
        params: HotelCreate,
    ) -> Result<HotelId, HotelError> {
        self.inner
            .create(id, params)
            .await
            .map_err(HotelError::from_registry)
    }

    #[instrument(skip(self))]
    pub async fn try_display(&self, id: HotelId) -> Result<Option<Hotel>, HotelError> {
        self.inner.get(id).await.map_err(HotelError::from_registry)
    }

    #[instrument(skip(self))]
    pub async fn try_modify(&self, id: HotelId, update: HotelUpdate) -> Result<Hotel, HotelError> {
        self.inner
            .update(id, update)
            .await
            .map_err(HotelError::from_registry)
    }

    /// Reserve one room, returning how many are left.
    #[instrument(skip(self))]
    pub async fn try_reserve_room(&self, id: HotelId) -> Result<u32, HotelError> {
        debug!("Reserving room");
        match self.inner.perform_action(id, HotelAction::ReserveRoom).await {
            Ok(HotelActionResult::ReserveRoom(remaining)) => Ok(remaining),
            Ok(_) => unreachable!("ReserveRoom action must return ReserveRoom result"),
            Err(e) => Err(HotelError::from_registry(e)),
        }
    }

    /// Release one room, returning how many are free afterwards.
    #[instrument(skip(self))]
    pub async fn try_cancel_reservation(&self, id: HotelId) -> Result<u32, HotelError> {
        debug!("Releasing room");
        match self.inner.perform_action(id, HotelAction::ReleaseRoom).await {
            Ok(HotelActionResult::ReleaseRoom(available)) => Ok(available),
            Ok(_) => unreachable!("ReleaseRoom action must return ReleaseRoom result"),
            Err(e) => Err(HotelError::from_registry(e)),
        }
    }
}

//! [`RecordEntity`] implementation for [`Hotel`], including room inventory actions.

use super::actions::{HotelAction, HotelActionResult};
use super::error::HotelError;
use crate::model::{Hotel, HotelCreate, HotelId, HotelUpdate};
use async_trait::async_trait;
use record_actor::RecordEntity;
use tracing::warn;

#[async_trait]
impl RecordEntity for Hotel {
    type Id = HotelId;
    type Create = HotelCreate;
    type Update = HotelUpdate;
    type Action = HotelAction;
    type ActionResult = HotelActionResult;
    type Context = ();
    type Error = HotelError;

    /// Rejects room counts that are negative or do not fit the stored type.
    fn from_create_params(id: HotelId, params: HotelCreate) -> Result<Self, Self::Error> {
        let rooms = u32::try_from(params.rooms).map_err(|_| HotelError::InvalidRoomCount {
            id,
            rooms: params.rooms,
        })?;
        Ok(Self::new(params.name, params.location, rooms))
    }

    /// Handles updates to the Hotel entity.
    ///
    /// # Fields Updated
    /// - `name`, `location`: replaced when present
    /// - `rooms`: replaced when present and valid; zero is valid
    async fn on_update(
        &mut self,
        update: HotelUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(rooms) = update.rooms {
            match u32::try_from(rooms) {
                Ok(rooms) => self.rooms_available = rooms,
                Err(_) => warn!(rooms, "Ignoring invalid room count"),
            }
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: HotelAction,
        _ctx: &Self::Context,
    ) -> Result<HotelActionResult, Self::Error> {
        match action {
            HotelAction::CheckAvailability => {
                Ok(HotelActionResult::CheckAvailability(self.rooms_available))
            }
            HotelAction::ReserveRoom => {
                if self.rooms_available == 0 {
                    return Err(HotelError::NoRoomsAvailable);
                }
                self.rooms_available -= 1;
                Ok(HotelActionResult::ReserveRoom(self.rooms_available))
            }
            HotelAction::ReleaseRoom => {
                self.rooms_available = self.rooms_available.saturating_add(1);
                Ok(HotelActionResult::ReleaseRoom(self.rooms_available))
            }
        }
    }
}

//! [`RecordEntity`] implementation for [`Reservation`].

use super::error::ReservationError;
use crate::clients::{CustomerClient, HotelClient};
use crate::model::{Reservation, ReservationCreate, ReservationId, ReservationUpdate};
use async_trait::async_trait;
use record_actor::RecordEntity;
use tracing::{debug, warn};

#[async_trait]
impl RecordEntity for Reservation {
    type Id = ReservationId;
    type Create = ReservationCreate;
    type Update = ReservationUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = (CustomerClient, HotelClient);
    type Error = ReservationError;

    /// Re-using a reservation id overwrites the old reservation.
    const REPLACE_ON_CREATE: bool = true;

    fn from_create_params(
        _id: ReservationId,
        params: ReservationCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            customer_id: params.customer_id,
            hotel_id: params.hotel_id,
        })
    }

    /// Checks the customer and takes a room. Nothing is stored if either fails.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (customers, hotels) = ctx;

        // Registration is a key check; the customer's fields are not validated.
        if !customers.try_exists(self.customer_id.clone()).await? {
            return Err(ReservationError::UnknownCustomer(self.customer_id.clone()));
        }

        let remaining = hotels.try_reserve_room(self.hotel_id.clone()).await?;
        debug!(hotel_id = %self.hotel_id, remaining, "Room taken");
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: ReservationUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    /// Gives the room back. A hotel that cannot take it back does not block the cancel.
    async fn on_delete(&self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (_, hotels) = ctx;
        match hotels.try_cancel_reservation(self.hotel_id.clone()).await {
            Ok(remaining) => debug!(hotel_id = %self.hotel_id, remaining, "Room released"),
            Err(e) => warn!(hotel_id = %self.hotel_id, error = %e, "Room not released"),
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

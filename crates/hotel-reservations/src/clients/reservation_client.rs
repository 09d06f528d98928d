//! # Reservation Client
//!
//! Provides a high-level API for interacting with the reservation registry.
//! The cross-registry checks run inside the registry, in the reservation's
//! `on_create` and `on_delete` hooks.
use crate::model::{CustomerId, HotelId, Reservation, ReservationCreate, ReservationId};
use crate::reservation_registry::ReservationError;
use record_actor::{EntityClient, RegistryClient};
use tracing::{error, info, instrument};

/// Client for interacting with the reservation registry.
#[derive(Clone)]
pub struct ReservationClient {
    inner: RegistryClient<Reservation>,
}

impl ReservationClient {
    pub fn new(inner: RegistryClient<Reservation>) -> Self {
        Self { inner }
    }

    /// Books a room at `hotel_id` for `customer_id`.
    ///
    /// Returns `false` if the customer is not registered, or the hotel is missing
    /// or full. An existing reservation under `id` is replaced.
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        id: ReservationId,
        customer_id: CustomerId,
        hotel_id: HotelId,
    ) -> bool {
        match self.try_create(id, customer_id, hotel_id).await {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, "Reservation not created");
                false
            }
        }
    }

    /// Cancels the reservation and returns its room to the hotel.
    /// Returns `false` if there is no such reservation.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: ReservationId) -> bool {
        match self.try_cancel(id).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Reservation not cancelled");
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn try_create(
        &self,
        id: ReservationId,
        customer_id: CustomerId,
        hotel_id: HotelId,
    ) -> Result<ReservationId, ReservationError> {
        info!("Sending create to reservation registry");
        let params = ReservationCreate {
            customer_id,
            hotel_id,
        };
        self.inner
            .create(id, params)
            .await
            .map_err(ReservationError::from_registry)
    }

    #[instrument(skip(self))]
    pub async fn try_cancel(&self, id: ReservationId) -> Result<(), ReservationError> {
        self.inner
            .delete(id)
            .await
            .map_err(ReservationError::from_registry)
    }
}

impl EntityClient<Reservation> for ReservationClient {
    fn inner(&self) -> &RegistryClient<Reservation> {
        &self.inner
    }
}

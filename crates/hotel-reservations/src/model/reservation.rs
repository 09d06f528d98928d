use crate::model::{CustomerId, HotelId};
use serde::{Deserialize, Serialize};

record_actor::record_id!(Reservation);

/// A room booked by a customer at a hotel.
///
/// Both references are checked when the reservation is created: the customer must
/// exist and the hotel must have a free room, which the reservation takes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
}

#[derive(Debug, Clone)]
pub struct ReservationCreate {
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
}

/// Reservations cannot be edited, only created and cancelled.
#[derive(Debug, Clone)]
pub enum ReservationUpdate {}

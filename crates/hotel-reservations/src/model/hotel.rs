use serde::{Deserialize, Serialize};

record_actor::record_id!(Hotel);

/// A hotel and its current room inventory.
///
/// `rooms_available` is the number of rooms that can still be reserved. Reserving a
/// room takes one, cancelling gives one back. No total capacity is recorded, so the
/// count is not capped when rooms are returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub rooms_available: u32,
}

impl Hotel {
    pub fn new(name: impl Into<String>, location: impl Into<String>, rooms_available: u32) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            rooms_available,
        }
    }
}

/// Payload for registering a hotel.
///
/// `rooms` is signed so that a negative count coming from a caller is rejected by
/// the registry rather than silently wrapped.
#[derive(Debug, Clone)]
pub struct HotelCreate {
    pub name: String,
    pub location: String,
    pub rooms: i64,
}

/// Fields to change on an existing hotel.
///
/// A negative `rooms` value is ignored; the other fields are still applied.
#[derive(Debug, Clone, Default)]
pub struct HotelUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rooms: Option<i64>,
}

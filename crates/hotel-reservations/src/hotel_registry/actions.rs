//! Inventory actions for the hotel registry.
//!
//! These are handled by [`RecordEntity::handle_action`](record_actor::RecordEntity::handle_action)
//! on [`Hotel`](crate::model::Hotel).

/// Operations on a hotel's room inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelAction {
    /// Reads the number of free rooms without modifying it.
    CheckAvailability,
    /// Takes one room.
    ///
    /// # Errors
    /// Fails with `NoRoomsAvailable` when the count is already zero.
    ReserveRoom,
    /// Returns one room.
    ReleaseRoom,
}

/// Results from HotelActions. Each variant matches its action and carries the
/// number of rooms available afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelActionResult {
    CheckAvailability(u32),
    ReserveRoom(u32),
    ReleaseRoom(u32),
}

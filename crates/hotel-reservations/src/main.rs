//! # Hotel Reservations Demo
//!
//! Runs one pass through the system against the stores in `HOTEL_DATA_DIR` (or the
//! current directory):
//! 1.  Starting the [`ReservationSystem`].
//! 2.  Registering a customer and a hotel.
//! 3.  Booking a room, then cancelling the booking.

use hotel_reservations::config::SystemConfig;
use hotel_reservations::lifecycle::ReservationSystem;
use hotel_reservations::model::{CustomerId, HotelId, ReservationId};
use record_actor::telemetry::setup_tracing;
use record_actor::EntityClient;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(data_dir = %config.data_dir.display(), "Starting hotel reservation demo");

    let system = ReservationSystem::new(&config);

    let customer_id = CustomerId::from("C-001");
    let hotel_id = HotelId::from("H-001");
    let reservation_id = ReservationId::from("R-001");

    let span = tracing::info_span!("registration");
    async {
        if !system
            .customers
            .create(customer_id.clone(), "Alice", "alice@example.com")
            .await
        {
            warn!(%customer_id, "Customer already registered");
        }
        if !system
            .hotels
            .create(hotel_id.clone(), "Hotel Central", "Monterrey", 3)
            .await
        {
            warn!(%hotel_id, "Hotel already registered");
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("booking");
    async {
        let booked = system
            .reservations
            .create(reservation_id.clone(), customer_id.clone(), hotel_id.clone())
            .await;
        let rooms = system.hotels.rooms_available(hotel_id.clone()).await;
        info!(booked, ?rooms, "Booking attempted");

        if let Some(reservation) = system.reservations.display(reservation_id.clone()).await {
            info!(?reservation, "Stored reservation");
        }

        let cancelled = system.reservations.cancel(reservation_id.clone()).await;
        let rooms = system.hotels.rooms_available(hotel_id.clone()).await;
        info!(cancelled, ?rooms, "Booking cancelled");
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}

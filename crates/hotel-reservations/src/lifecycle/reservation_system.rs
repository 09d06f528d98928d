use crate::clients::{CustomerClient, HotelClient, ReservationClient};
use crate::config::SystemConfig;
use crate::{customer_registry, hotel_registry, reservation_registry};
use tracing::{error, info};

/// The running reservation system: three registries and their clients.
///
/// # Example
///
/// ```ignore
/// let system = ReservationSystem::new(&SystemConfig::in_dir("data"));
///
/// system.customers.create(CustomerId::from(1u32), "Ada", "ada@example.com").await;
/// system.hotels.create(HotelId::from(10u32), "Grand", "Lisbon", 3).await;
/// system.reservations.create(ReservationId::from(100u32), 1u32.into(), 10u32.into()).await;
///
/// system.shutdown().await?;
/// ```
pub struct ReservationSystem {
    pub customers: CustomerClient,
    pub hotels: HotelClient,
    pub reservations: ReservationClient,

    /// Task handles for all running registries (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ReservationSystem {
    /// Creates the three registries over `config.data_dir` and spawns them.
    ///
    /// Must be called inside a Tokio runtime. Nothing is read from disk until the
    /// first request.
    pub fn new(config: &SystemConfig) -> Self {
        let records = config.records();
        let capacity = config.channel_capacity.max(1);

        // 1. Create registries (no dependencies)
        let (customer_actor, customers) =
            customer_registry::new(records.clone(), &config.customers_store, capacity);
        let (hotel_actor, hotels) =
            hotel_registry::new(records.clone(), &config.hotels_store, capacity);
        let (reservation_actor, reservations) =
            reservation_registry::new(records, &config.reservations_store, capacity);

        // 2. Start registries with injected context
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let hotel_handle = tokio::spawn(hotel_actor.run(()));
        let reservation_handle =
            tokio::spawn(reservation_actor.run((customers.clone(), hotels.clone())));

        info!(data_dir = %config.data_dir.display(), "Reservation system started");

        Self {
            customers,
            hotels,
            reservations,
            handles: vec![customer_handle, hotel_handle, reservation_handle],
        }
    }

    /// Gracefully shuts down every registry.
    ///
    /// Returns `Err` if any registry task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the reservation channel first releases its clones of the other clients.
        drop(self.reservations);
        drop(self.customers);
        drop(self.hotels);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Registry task failed: {:?}", e);
                return Err(format!("Registry task failed: {e:?}"));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

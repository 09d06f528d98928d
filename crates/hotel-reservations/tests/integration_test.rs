use hotel_reservations::config::SystemConfig;
use hotel_reservations::lifecycle::ReservationSystem;
use hotel_reservations::model::{CustomerId, HotelId, ReservationId};
use record_actor::telemetry::try_setup_tracing;
use record_actor::EntityClient;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;

fn start(dir: &Path) -> ReservationSystem {
    try_setup_tracing();
    ReservationSystem::new(&SystemConfig::in_dir(dir))
}

fn stored(dir: &Path, store: &str) -> Value {
    let text = std::fs::read_to_string(dir.join(store)).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Full end-to-end integration test with all real registries.
#[tokio::test]
async fn test_full_reservation_lifecycle() {
    let dir = TempDir::new().unwrap();
    let system = start(dir.path());

    assert!(
        system
            .customers
            .create(CustomerId::from(1u32), "Ana", "ana@example.com")
            .await
    );
    assert!(
        system
            .hotels
            .create(HotelId::from(10u32), "Hotel Central", "Monterrey", 2)
            .await
    );

    // Book a room
    assert!(
        system
            .reservations
            .create(
                ReservationId::from(100u32),
                CustomerId::from(1u32),
                HotelId::from(10u32)
            )
            .await
    );
    assert_eq!(
        system.hotels.rooms_available(HotelId::from(10u32)).await,
        Some(1)
    );
    assert_eq!(
        stored(dir.path(), "reservations.json"),
        json!({"100": {"customer_id": "1", "hotel_id": "10"}})
    );

    // Cancel it
    assert!(system.reservations.cancel(ReservationId::from(100u32)).await);
    assert_eq!(
        system.hotels.rooms_available(HotelId::from(10u32)).await,
        Some(2)
    );
    assert!(system
        .reservations
        .display(ReservationId::from(100u32))
        .await
        .is_none());
    assert!(!system.reservations.cancel(ReservationId::from(100u32)).await);

    system.shutdown().await.unwrap();

    assert_eq!(
        stored(dir.path(), "hotels.json"),
        json!({
            "10": {"name": "Hotel Central", "location": "Monterrey", "rooms_available": 2}
        })
    );
    assert_eq!(
        stored(dir.path(), "customers.json"),
        json!({"1": {"name": "Ana", "email": "ana@example.com"}})
    );
}

#[tokio::test]
async fn test_unregistered_customer_cannot_reserve() {
    let dir = TempDir::new().unwrap();
    let system = start(dir.path());
    system
        .hotels
        .create(HotelId::from(10u32), "Hotel Central", "Monterrey", 2)
        .await;

    let created = system
        .reservations
        .create(
            ReservationId::from(100u32),
            CustomerId::from(999u32),
            HotelId::from(10u32),
        )
        .await;

    assert!(!created);
    assert_eq!(
        system.hotels.rooms_available(HotelId::from(10u32)).await,
        Some(2)
    );
    assert!(!dir.path().join("reservations.json").exists());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_nonexistent_or_full_hotel_cannot_be_reserved() {
    let dir = TempDir::new().unwrap();
    let system = start(dir.path());
    system
        .customers
        .create(CustomerId::from(1u32), "Ana", "ana@example.com")
        .await;
    system
        .hotels
        .create(HotelId::from(20u32), "Tiny Inn", "Saltillo", 1)
        .await;

    async fn reserve(system: &ReservationSystem, res: u32, hotel: u32) -> bool {
        system
            .reservations
            .create(
                ReservationId::from(res),
                CustomerId::from(1u32),
                HotelId::from(hotel),
            )
            .await
    }

    assert!(!reserve(&system, 100, 99).await);
    assert!(reserve(&system, 101, 20).await);
    assert!(!reserve(&system, 102, 20).await);

    let ids: Vec<String> = system
        .reservations
        .list()
        .await
        .into_iter()
        .map(|(id, _)| id.to_string())
        .collect();
    assert_eq!(ids, vec!["101"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_after_hotel_deleted() {
    let dir = TempDir::new().unwrap();
    let system = start(dir.path());
    system
        .customers
        .create(CustomerId::from(1u32), "Ana", "ana@example.com")
        .await;
    system
        .hotels
        .create(HotelId::from(10u32), "Hotel Central", "Monterrey", 2)
        .await;
    system
        .reservations
        .create(
            ReservationId::from(100u32),
            CustomerId::from(1u32),
            HotelId::from(10u32),
        )
        .await;

    assert!(system.hotels.delete(HotelId::from(10u32)).await);

    assert!(system.reservations.cancel(ReservationId::from(100u32)).await);
    assert_eq!(stored(dir.path(), "reservations.json"), json!({}));
    assert_eq!(stored(dir.path(), "hotels.json"), json!({}));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reusing_reservation_id_overwrites() {
    let dir = TempDir::new().unwrap();
    let system = start(dir.path());
    system
        .customers
        .create(CustomerId::from(1u32), "Ana", "ana@example.com")
        .await;
    system
        .customers
        .create(CustomerId::from(2u32), "Luis", "luis@example.com")
        .await;
    system
        .hotels
        .create(HotelId::from(10u32), "Hotel Central", "Monterrey", 5)
        .await;

    let id = ReservationId::from("R-1");
    for customer in [1u32, 2u32] {
        assert!(
            system
                .reservations
                .create(
                    id.clone(),
                    CustomerId::from(customer),
                    HotelId::from(10u32)
                )
                .await
        );
    }

    let reservation = system.reservations.display(id).await.unwrap();
    assert_eq!(reservation.customer_id, CustomerId::from(2u32));
    // The overwritten reservation keeps its room.
    assert_eq!(
        system.hotels.rooms_available(HotelId::from(10u32)).await,
        Some(3)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_reservations_respect_inventory() {
    let dir = TempDir::new().unwrap();
    let system = start(dir.path());
    system
        .customers
        .create(CustomerId::from(1u32), "Ana", "ana@example.com")
        .await;
    system
        .hotels
        .create(HotelId::from(10u32), "Hotel Central", "Monterrey", 3)
        .await;

    let mut tasks = Vec::new();
    for n in 0..10u32 {
        let reservations = system.reservations.clone();
        tasks.push(tokio::spawn(async move {
            reservations
                .create(
                    ReservationId::from(n),
                    CustomerId::from(1u32),
                    HotelId::from(10u32),
                )
                .await
        }));
    }

    let mut booked = 0;
    for task in tasks {
        if task.await.unwrap() {
            booked += 1;
        }
    }

    assert_eq!(booked, 3);
    assert_eq!(
        system.hotels.rooms_available(HotelId::from(10u32)).await,
        Some(0)
    );
    assert_eq!(system.reservations.list().await.len(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_out_of_band_edits_are_visible() {
    let dir = TempDir::new().unwrap();
    let system = start(dir.path());
    system
        .hotels
        .create(HotelId::from(10u32), "Hotel Central", "Monterrey", 1)
        .await;

    std::fs::write(
        dir.path().join("hotels.json"),
        r#"{"10": {"name": "Hotel Central", "location": "Monterrey", "rooms_available": 7}}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("customers.json"),
        r#"{"5": {"name": "Edited In", "email": "edit@example.com"}}"#,
    )
    .unwrap();

    assert_eq!(
        system.hotels.rooms_available(HotelId::from(10u32)).await,
        Some(7)
    );
    assert!(
        system
            .reservations
            .create(
                ReservationId::from(1u32),
                CustomerId::from(5u32),
                HotelId::from(10u32)
            )
            .await
    );
    assert_eq!(
        system.hotels.rooms_available(HotelId::from(10u32)).await,
        Some(6)
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stores_follow_configured_names() {
    let dir = TempDir::new().unwrap();
    let config = SystemConfig {
        customers_store: "clientes.json".into(),
        hotels_store: "hoteles.json".into(),
        reservations_store: "reservaciones.json".into(),
        ..SystemConfig::in_dir(dir.path().join("data"))
    };
    try_setup_tracing();
    let system = ReservationSystem::new(&config);

    system
        .customers
        .create(CustomerId::from(1u32), "Ana", "ana@example.com")
        .await;
    system
        .hotels
        .create(HotelId::from(10u32), "Hotel Central", "Monterrey", 1)
        .await;
    system
        .reservations
        .create(
            ReservationId::from(1u32),
            CustomerId::from(1u32),
            HotelId::from(10u32),
        )
        .await;
    system.shutdown().await.unwrap();

    let data = dir.path().join("data");
    for store in ["clientes.json", "hoteles.json", "reservaciones.json"] {
        assert!(data.join(store).exists(), "{store} missing");
    }
    assert!(!data.join("hotels.json").exists());
}

#[tokio::test]
async fn test_customer_with_missing_fields_can_still_reserve() {
    let dir = TempDir::new().unwrap();
    let system = start(dir.path());
    std::fs::write(
        dir.path().join("customers.json"),
        r#"{"1": {"name": "Ana"}}"#,
    )
    .unwrap();
    system
        .hotels
        .create(HotelId::from(10u32), "Hotel Central", "Monterrey", 1)
        .await;

    assert!(system.customers.display(CustomerId::from(1u32)).await.is_none());
    assert!(system.customers.exists(CustomerId::from(1u32)).await);
    assert!(
        system
            .reservations
            .create(
                ReservationId::from(100u32),
                CustomerId::from(1u32),
                HotelId::from(10u32)
            )
            .await
    );
    assert_eq!(
        system.hotels.rooms_available(HotelId::from(10u32)).await,
        Some(0)
    );

    system.shutdown().await.unwrap();
}

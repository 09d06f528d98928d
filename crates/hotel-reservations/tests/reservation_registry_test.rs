use hotel_reservations::clients::{CustomerClient, HotelClient, ReservationClient};
use hotel_reservations::hotel_registry::{HotelActionResult, HotelError};
use hotel_reservations::model::{
    Customer, CustomerId, Hotel, HotelId, Reservation, ReservationId,
};
use hotel_reservations::reservation_registry::{self, ReservationError};
use record_actor::mock::MockClient;
use record_actor::{EntityClient, RecordStore, RegistryError};
use serde_json::json;
use tempfile::TempDir;

/// Real reservation registry with mocked customer and hotel registries.
/// This tests the hooks (on_create, on_delete) while isolating them from the other stores.
struct Harness {
    dir: TempDir,
    customer_mock: MockClient<Customer>,
    hotel_mock: MockClient<Hotel>,
    reservations: ReservationClient,
    actor_handle: tokio::task::JoinHandle<()>,
}

impl Harness {
    fn start() -> Self {
        let dir = TempDir::new().unwrap();
        let customer_mock = MockClient::<Customer>::new();
        let hotel_mock = MockClient::<Hotel>::new();

        let customers = CustomerClient::new(customer_mock.client());
        let hotels = HotelClient::new(hotel_mock.client());

        let (actor, reservations) =
            reservation_registry::new(RecordStore::new(dir.path()), "reservations.json", 8);
        let actor_handle = tokio::spawn(actor.run((customers, hotels)));

        Self {
            dir,
            customer_mock,
            hotel_mock,
            reservations,
            actor_handle,
        }
    }

    fn stored(&self) -> serde_json::Value {
        let path = self.dir.path().join("reservations.json");
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    async fn finish(self) {
        self.customer_mock.verify();
        self.hotel_mock.verify();
        drop(self.reservations);
        self.actor_handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_create_checks_customer_then_reserves_room() {
    let mut h = Harness::start();

    h.customer_mock
        .expect_contains(CustomerId::from(1u32))
        .return_ok(true);
    h.hotel_mock
        .expect_action(HotelId::from(10u32))
        .return_ok(HotelActionResult::ReserveRoom(2));

    let created = h
        .reservations
        .create(
            ReservationId::from(100u32),
            CustomerId::from(1u32),
            HotelId::from(10u32),
        )
        .await;
    assert!(created);

    let reservation = h
        .reservations
        .display(ReservationId::from(100u32))
        .await
        .unwrap();
    assert_eq!(
        reservation,
        Reservation {
            customer_id: CustomerId::from(1u32),
            hotel_id: HotelId::from(10u32),
        }
    );
    assert_eq!(
        h.stored(),
        json!({"100": {"customer_id": "1", "hotel_id": "10"}})
    );

    h.finish().await;
}

#[tokio::test]
async fn test_unknown_customer_never_touches_hotel() {
    let mut h = Harness::start();

    h.customer_mock
        .expect_contains(CustomerId::from(9u32))
        .return_ok(false);

    let result = h
        .reservations
        .try_create(
            ReservationId::from(100u32),
            CustomerId::from(9u32),
            HotelId::from(10u32),
        )
        .await;

    assert!(matches!(
        result,
        Err(ReservationError::UnknownCustomer(id)) if id.as_str() == "9"
    ));
    assert!(!h.dir.path().join("reservations.json").exists());

    h.finish().await;
}

#[tokio::test]
async fn test_full_hotel_stores_nothing() {
    let mut h = Harness::start();

    h.customer_mock
        .expect_contains(CustomerId::from(1u32))
        .return_ok(true);
    h.hotel_mock
        .expect_action(HotelId::from(10u32))
        .return_err(RegistryError::EntityError(Box::new(
            HotelError::NoRoomsAvailable,
        )));

    let result = h
        .reservations
        .try_create(
            ReservationId::from(100u32),
            CustomerId::from(1u32),
            HotelId::from(10u32),
        )
        .await;

    assert!(matches!(
        result,
        Err(ReservationError::Hotel(HotelError::NoRoomsAvailable))
    ));
    assert!(h.reservations.list().await.is_empty());

    h.finish().await;
}

#[tokio::test]
async fn test_cancel_releases_room_even_when_hotel_is_gone() {
    let mut h = Harness::start();
    std::fs::write(
        h.dir.path().join("reservations.json"),
        r#"{"100": {"customer_id": "1", "hotel_id": "10"}}"#,
    )
    .unwrap();

    h.hotel_mock
        .expect_action(HotelId::from(10u32))
        .return_err(RegistryError::NotFound("10".into()));

    assert!(h.reservations.cancel(ReservationId::from(100u32)).await);
    assert_eq!(h.stored(), json!({}));

    // A second cancel finds nothing and asks the hotel for nothing.
    assert!(matches!(
        h.reservations.try_cancel(ReservationId::from(100u32)).await,
        Err(ReservationError::NotFound(_))
    ));

    h.finish().await;
}

#[tokio::test]
async fn test_numeric_references_are_read_as_text() {
    let h = Harness::start();
    std::fs::write(
        h.dir.path().join("reservations.json"),
        r#"{"7": {"customer_id": 1, "hotel_id": 10}}"#,
    )
    .unwrap();

    let reservation = h
        .reservations
        .display(ReservationId::from(7u32))
        .await
        .unwrap();
    assert_eq!(reservation.customer_id.as_str(), "1");
    assert_eq!(reservation.hotel_id, HotelId::from("10"));

    h.finish().await;
}

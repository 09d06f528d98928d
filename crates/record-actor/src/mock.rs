//! # Mock Registries
//!
//! `MockClient<T>` hands out a real [`RegistryClient<T>`] whose requests are answered
//! from a queue of expectations instead of a store. It is the way to test a registry
//! that depends on other registries (the reservation registry needs customers and
//! hotels) without touching their stores.
//!
//! | | MockClient | Real registry |
//! |---|---|---|
//! | **Storage** | none | a JSON file per store |
//! | **Determinism** | scripted replies | depends on file contents |
//! | **Error injection** | `return_err` | needs a broken store |
//!
//! Expectations are consumed in order. A request of the wrong kind, or for a different
//! id than expected, panics inside the mock task, which closes the channel and makes
//! the caller see [`RegistryError::ActorDropped`].
//!
//! ```rust
//! use record_actor::mock::MockClient;
//! use record_actor::{RecordEntity, RegistryError};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//!
//! record_actor::record_id!(Guest);
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)] struct Guest { name: String }
//! #[derive(Debug)] struct GuestCreate;
//! #[derive(Debug)] struct GuestUpdate;
//! #[derive(Debug)] enum GuestAction {}
//! #[derive(Debug, thiserror::Error)] #[error("guest error")] struct GuestError;
//!
//! #[async_trait]
//! impl RecordEntity for Guest {
//!     type Id = GuestId; type Create = GuestCreate; type Update = GuestUpdate;
//!     type Action = GuestAction; type ActionResult = (); type Context = (); type Error = GuestError;
//!     fn from_create_params(_: GuestId, _: GuestCreate) -> Result<Self, GuestError> {
//!         Ok(Self { name: String::new() })
//!     }
//!     async fn on_update(&mut self, _: GuestUpdate, _: &()) -> Result<(), GuestError> { Ok(()) }
//!     async fn handle_action(&mut self, a: GuestAction, _: &()) -> Result<(), GuestError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Guest>::new();
//!     let client = mock.client();
//!
//!     // Simulate a registry that went away
//!     mock.expect_get(GuestId::from(1u32)).return_err(RegistryError::ActorClosed);
//!
//!     let result = client.get(GuestId::from(1u32)).await;
//!     assert!(matches!(result, Err(RegistryError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the raw requests instead, use [`create_mock_client`] together with
//! [`expect_create`], [`expect_get`] and [`expect_action`].

use crate::client::RegistryClient;
use crate::entity::RecordEntity;
use crate::error::RegistryError;
use crate::message::RegistryRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply the mock sends back.
enum Expectation<T: RecordEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, RegistryError>,
    },
    Contains {
        id: T::Id,
        response: Result<bool, RegistryError>,
    },
    Create {
        id: T::Id,
        response: Result<T::Id, RegistryError>,
    },
    List {
        response: Result<Vec<(T::Id, T)>, RegistryError>,
    },
    Update {
        id: T::Id,
        response: Result<T, RegistryError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), RegistryError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, RegistryError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// ```ignore
/// let mut mock = MockClient::<Hotel>::new();
/// mock.expect_action(HotelId::from(1u32)).return_ok(HotelActionResult::ReserveRoom(0));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: RecordEntity> {
    client: RegistryClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RecordEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RecordEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RegistryRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let pending = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = pending.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        RegistryRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Create { id, respond_to, .. },
                        Some(Expectation::Create {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "create for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Contains { id, respond_to },
                        Some(Expectation::Contains {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "contains for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "update for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "delete for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        RegistryRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: RegistryClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RegistryClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `contains` operation.
    pub fn expect_contains(&mut self, id: T::Id) -> ExpectationBuilder<T, bool> {
        self.builder(move |response| Expectation::Contains { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self, id: T::Id) -> ExpectationBuilder<T, T::Id> {
        self.builder(move |response| Expectation::Create { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<(T::Id, T)>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, RegistryError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Completes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: RecordEntity, R> {
    make: Box<dyn FnOnce(Result<R, RegistryError>) -> Expectation<T>>,
    expectations: Expectations<T>,
}

impl<T: RecordEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RegistryError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, RegistryError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test wants to inspect the request payloads itself and answer
/// them by hand. [`MockClient`] is the more fluent option.
pub fn create_mock_client<T: RecordEntity>(
    buffer_size: usize,
) -> (RegistryClient<T>, mpsc::Receiver<RegistryRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(
    T::Id,
    T::Create,
    oneshot::Sender<Result<T::Id, RegistryError>>,
)> {
    match receiver.recv().await {
        Some(RegistryRequest::Create {
            id,
            params,
            respond_to,
        }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get.
pub async fn expect_get<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, RegistryError>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action.
pub async fn expect_action<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RegistryRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, RegistryError>>,
)> {
    match receiver.recv().await {
        Some(RegistryRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

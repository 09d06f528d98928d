//! # Generic Client
//!
//! This module defines the generic client for communicating with registry actors.

use crate::entity::RecordEntity;
use crate::error::RegistryError;
use crate::message::RegistryRequest;
use tokio::sync::{mpsc, oneshot};

/// ## RegistryClient
///
/// Type-safe async handle to a [`RegistryActor`](crate::RegistryActor). Every call sends a
/// [`RegistryRequest`] over the actor's channel and awaits the reply on a oneshot.
/// Holding only a sender, it is cheap to clone and share across tasks.
#[derive(Clone)]
pub struct RegistryClient<T: RecordEntity> {
    sender: mpsc::Sender<RegistryRequest<T>>,
}

impl<T: RecordEntity> RegistryClient<T> {
    pub fn new(sender: mpsc::Sender<RegistryRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, RegistryError>>) -> RegistryRequest<T>,
    ) -> Result<R, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    pub async fn create(&self, id: T::Id, params: T::Create) -> Result<T::Id, RegistryError> {
        self.request(|respond_to| RegistryRequest::Create {
            id,
            params,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, RegistryError> {
        self.request(|respond_to| RegistryRequest::Get { id, respond_to })
            .await
    }

    /// Whether any record is stored under `id`, readable or not.
    pub async fn contains(&self, id: T::Id) -> Result<bool, RegistryError> {
        self.request(|respond_to| RegistryRequest::Contains { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<(T::Id, T)>, RegistryError> {
        self.request(|respond_to| RegistryRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, RegistryError> {
        self.request(|respond_to| RegistryRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), RegistryError> {
        self.request(|respond_to| RegistryRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, RegistryError> {
        self.request(|respond_to| RegistryRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}

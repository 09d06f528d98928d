//! # RecordEntity Trait
//!
//! The `RecordEntity` trait is the contract every persisted resource (Customer, Hotel,
//! Reservation) implements to be managed by the generic [`RegistryActor`](crate::RegistryActor).
//! It names the identifier, the create/update DTOs, the custom actions, the injected
//! context and the error type, and provides the lifecycle hooks (`on_create`,
//! `on_update`, `on_delete`, `handle_action`).
//!
//! The entity itself is the stored record: it is deserialized from the store before
//! every hook and serialized back afterwards, so it must round-trip through serde.
//! The identifier is the store key and is not part of the record.
//!
//! # Provided Methods (Hooks)
//! - [`RecordEntity::on_create`]
//! - [`RecordEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any persisted entity must implement to be managed by a `RegistryActor`.
///
/// # Async & Context
/// Hooks are async so they can call other registries. The `Context` type is injected
/// into every hook when the actor is started, which lets a registry depend on
/// clients that were created after it.
#[async_trait]
pub trait RecordEntity:
    Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The identifier, stored as the string key of the record.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<String>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `ReserveRoom`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity, shared by all of its hooks and actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// When `true`, creating an id that already exists replaces the stored record
    /// instead of failing with `AlreadyExists`.
    const REPLACE_ON_CREATE: bool = false;

    /// Construct the full entity from the id and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is written to the store.
    /// Failing here leaves the store untouched.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action. The record is saved afterwards
    /// only if the action changed it.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

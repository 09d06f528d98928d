//! # EntityClient Trait
//!
//! Shared read and delete operations for resource-specific clients, built on top of
//! a generic `RegistryClient`. These operations never fail outward: errors are logged
//! and turned into `None`, `false` or an empty list, so callers only branch on the
//! returned value.
use crate::{RecordEntity, RegistryClient};
use async_trait::async_trait;
use tracing::{instrument, warn};

/// Trait for resource-specific clients to inherit the standard total operations.
///
/// # Example
///
/// ```rust
/// use record_actor::{EntityClient, RecordEntity, RegistryClient};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// record_actor::record_id!(Guest);
///
/// #[derive(Clone, Debug, Serialize, Deserialize)] struct Guest { name: String }
/// #[derive(Debug)] struct GuestCreate;
/// #[derive(Debug)] struct GuestUpdate;
/// #[derive(Debug)] enum GuestAction {}
/// #[derive(Debug, thiserror::Error)] #[error("guest error")] struct GuestError;
///
/// #[async_trait]
/// impl RecordEntity for Guest {
///     type Id = GuestId;
///     type Create = GuestCreate;
///     type Update = GuestUpdate;
///     type Action = GuestAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = GuestError;
///
///     fn from_create_params(_: GuestId, _: GuestCreate) -> Result<Self, GuestError> {
///         Ok(Self { name: String::new() })
///     }
///     async fn on_update(&mut self, _: GuestUpdate, _: &()) -> Result<(), GuestError> { Ok(()) }
///     async fn handle_action(&mut self, a: GuestAction, _: &()) -> Result<(), GuestError> { match a {} }
/// }
///
/// struct GuestClient {
///     inner: RegistryClient<Guest>,
/// }
///
/// impl EntityClient<Guest> for GuestClient {
///     fn inner(&self) -> &RegistryClient<Guest> {
///         &self.inner
///     }
/// }
///
/// async fn usage(client: GuestClient) {
///     // display(), delete(), exists() and list() come for free.
///     let _ = client.display(GuestId::from(1u32)).await;
///     let _ = client.delete(GuestId::from(1u32)).await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: RecordEntity>: Send + Sync {
    /// Access the inner generic RegistryClient.
    fn inner(&self) -> &RegistryClient<T>;

    /// Fetch a record by id. Absent, unreadable or unreachable records all yield `None`.
    #[instrument(skip(self))]
    async fn display(&self, id: T::Id) -> Option<T> {
        match self.inner().get(id.clone()).await {
            Ok(item) => item,
            Err(e) => {
                warn!(%id, error = %e, "Display failed");
                None
            }
        }
    }

    /// Delete a record by id. Returns `false` if it did not exist or could not be removed.
    #[instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> bool {
        match self.inner().delete(id.clone()).await {
            Ok(()) => true,
            Err(e) => {
                warn!(%id, error = %e, "Delete failed");
                false
            }
        }
    }

    /// Returns `true` when anything is stored under `id`, even a record that no
    /// longer decodes.
    #[instrument(skip(self))]
    async fn exists(&self, id: T::Id) -> bool {
        match self.inner().contains(id.clone()).await {
            Ok(found) => found,
            Err(e) => {
                warn!(%id, error = %e, "Exists failed");
                false
            }
        }
    }

    /// All records in key order.
    #[instrument(skip(self))]
    async fn list(&self) -> Vec<(T::Id, T)> {
        self.inner().list().await.unwrap_or_else(|e| {
            warn!(error = %e, "List failed");
            Vec::new()
        })
    }
}

//! # Registry Messages
//!
//! The request type sent from a [`RegistryClient`](crate::RegistryClient) to its
//! [`RegistryActor`](crate::RegistryActor).

use crate::entity::RecordEntity;
use crate::error::RegistryError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by registries.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

/// Message sent to a registry actor to request one operation.
///
/// The variants map to CRUD plus a `Contains` key check, a `List` scan and a custom `Action` for
/// resource-specific logic (e.g., reserving a room). Each one is served by a full
/// load-mutate-save cycle against the entity's store.
#[derive(Debug)]
pub enum RegistryRequest<T: RecordEntity> {
    Create {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Key presence only; the record is not decoded.
    Contains {
        id: T::Id,
        respond_to: Response<bool>,
    },
    List {
        respond_to: Response<Vec<(T::Id, T)>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

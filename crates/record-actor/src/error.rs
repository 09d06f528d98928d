//! # Registry Errors
//!
//! Error types shared by every registry. Entity-specific failures travel inside
//! [`RegistryError::EntityError`] and are recovered by the domain error types.

use std::path::PathBuf;

/// Failures of the underlying record store.
///
/// A missing or malformed store is not an error; see [`crate::store::RecordStore::load`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read store {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write store {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode store {store}: {source}")]
    Encode {
        store: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur within the registry framework itself.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Registry closed")]
    ActorClosed,
    #[error("Registry dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record already exists: {0}")]
    AlreadyExists(String),
    #[error("Corrupt record {id}: {source}")]
    CorruptRecord {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    /// Recovers the entity's own error type, or hands the error back unchanged.
    pub fn into_entity_error<E>(self) -> Result<E, Self>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Self::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(Self::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

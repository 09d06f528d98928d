//! Error types for the customer registry.

use crate::model::CustomerId;
use record_actor::RegistryError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(CustomerId),

    #[error("Customer already exists: {0}")]
    AlreadyExists(CustomerId),

    /// The registry could not be reached, or its store could not be read or written.
    #[error("Customer registry error: {0}")]
    Registry(#[source] RegistryError),
}

impl CustomerError {
    pub fn from_registry(e: RegistryError) -> Self {
        match e.into_entity_error::<Self>() {
            Ok(own) => own,
            Err(RegistryError::NotFound(id)) => Self::NotFound(id.into()),
            Err(RegistryError::AlreadyExists(id)) => Self::AlreadyExists(id.into()),
            Err(other) => Self::Registry(other),
        }
    }
}

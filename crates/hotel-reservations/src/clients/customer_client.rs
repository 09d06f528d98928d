//! # Customer Client
//!
//! Provides a high-level API for interacting with the customer registry.
use crate::customer_registry::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use record_actor::{EntityClient, RegistryClient};
use tracing::{error, instrument};

/// Client for interacting with the customer registry.
#[derive(Clone)]
pub struct CustomerClient {
    inner: RegistryClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: RegistryClient<Customer>) -> Self {
        Self { inner }
    }
}

impl EntityClient<Customer> for CustomerClient {
    fn inner(&self) -> &RegistryClient<Customer> {
        &self.inner
    }
}

impl CustomerClient {
    /// Registers a customer. Returns `false` if the id is taken or the store failed.
    #[instrument(skip(self))]
    pub async fn create(&self, id: CustomerId, name: &str, email: &str) -> bool {
        let params = CustomerCreate {
            name: name.to_string(),
            email: email.to_string(),
        };
        match self.try_create(id, params).await {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, "Customer not created");
                false
            }
        }
    }

    /// Changes the fields present in `update`. Returns `false` if the customer does not exist.
    #[instrument(skip(self))]
    pub async fn modify(&self, id: CustomerId, update: CustomerUpdate) -> bool {
        match self.try_modify(id, update).await {
            Ok(_) => true,
            Err(e) => {
                error!(error = %e, "Customer not modified");
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn try_create(
        &self,
        id: CustomerId,
        params: CustomerCreate,
    ) -> Result<CustomerId, CustomerError> {
        self.inner
            .create(id, params)
            .await
            .map_err(CustomerError::from_registry)
    }

    /// Like `display`, but a store failure is an error instead of `None`.
    #[instrument(skip(self))]
    pub async fn try_display(&self, id: CustomerId) -> Result<Option<Customer>, CustomerError> {
        self.inner.get(id).await.map_err(CustomerError::from_registry)
    }

    /// Whether the id is registered. A record with missing fields still counts.
    #[instrument(skip(self))]
    pub async fn try_exists(&self, id: CustomerId) -> Result<bool, CustomerError> {
        self.inner
            .contains(id)
            .await
            .map_err(CustomerError::from_registry)
    }

    /// Returns the customer as stored after the change.
    #[instrument(skip(self))]
    pub async fn try_modify(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        self.inner
            .update(id, update)
            .await
            .map_err(CustomerError::from_registry)
    }
}

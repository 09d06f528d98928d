use serde::{Deserialize, Serialize};

record_actor::record_id!(Customer);

/// A registered customer, stored as `{"name": ..., "email": ...}`.
///
/// Managed by the customer registry; see
/// [`impl RecordEntity for Customer`](#impl-RecordEntity-for-Customer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Payload for registering a customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
}

/// Fields to change on an existing customer. `None` leaves a field as it is,
/// `Some` replaces it, including with an empty string.
#[derive(Debug, Clone, Default)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

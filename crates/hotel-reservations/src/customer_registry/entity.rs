//! [`RecordEntity`] implementation for [`Customer`].

use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use record_actor::RecordEntity;

#[async_trait]
impl RecordEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(_id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(params.name, params.email))
    }

    /// Applies every field that is present.
    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        _action: (),
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_sets_present_fields_only() {
        let mut customer = Customer::new("Ada", "ada@example.com");

        let update = CustomerUpdate {
            email: Some("ada@lovelace.org".into()),
            ..Default::default()
        };
        customer.on_update(update, &()).await.unwrap();

        assert_eq!(customer, Customer::new("Ada", "ada@lovelace.org"));
    }

    #[tokio::test]
    async fn update_accepts_empty_values() {
        let mut customer = Customer::new("Ada", "ada@example.com");

        let update = CustomerUpdate {
            name: Some(String::new()),
            email: None,
        };
        customer.on_update(update, &()).await.unwrap();

        assert_eq!(customer.name, "");
        assert_eq!(customer.email, "ada@example.com");
    }
}

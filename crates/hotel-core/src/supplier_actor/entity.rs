//! [`ActorEntity`] implementation for [`Supplier`].

use super::error::SupplierError;
use crate::model::{Supplier, SupplierCreate, SupplierId, SupplierUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

impl Supplier {
    fn validate(&self) -> Result<(), SupplierError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(SupplierError::ValidationError(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Supplier {
    type Id = SupplierId;
    type Create = SupplierCreate;
    type Update = SupplierUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = SupplierError;

    fn from_create_params(id: SupplierId, params: SupplierCreate) -> Result<Self, Self::Error> {
        let supplier = Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            address: params.address,
            description: params.description,
            is_active: true,
        };
        supplier.validate()?;
        Ok(supplier)
    }

    async fn on_update(&mut self, update: SupplierUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        self.validate()
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

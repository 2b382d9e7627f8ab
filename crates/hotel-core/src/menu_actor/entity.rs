//! [`ActorEntity`] implementation for [`MenuItem`].

use super::error::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use rust_decimal::Decimal;

impl MenuItem {
    fn validate(&self) -> Result<(), MenuError> {
        if self.name.trim().is_empty() {
            return Err(MenuError::ValidationError("name is required".into()));
        }
        if self.category.trim().is_empty() {
            return Err(MenuError::ValidationError("category is required".into()));
        }
        if self.price <= Decimal::ZERO {
            return Err(MenuError::ValidationError(format!(
                "price must be greater than zero, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        let item = Self {
            id,
            name: params.name,
            description: params.description,
            category: params.category,
            price: params.price,
            is_available: params.is_available,
        };
        item.validate()?;
        Ok(item)
    }

    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(is_available) = update.is_available {
            self.is_available = is_available;
        }
        self.validate()
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

//! Menu pricing for food-order lines.

use super::error::FoodOrderError;
use crate::clients::MenuClient;
use crate::model::MenuItemId;
use crate::ordering::PriceCatalog;
use async_trait::async_trait;
use resource_actor::ActorClient;
use rust_decimal::Decimal;

/// Prices lines from the live menu. Items switched off (`is_available == false`)
/// cannot be ordered.
pub struct MenuCatalog<'a>(pub &'a MenuClient);

#[async_trait]
impl<'a> PriceCatalog for MenuCatalog<'a> {
    type ItemId = MenuItemId;
    type Error = FoodOrderError;

    async fn unit_price(&self, item: &MenuItemId) -> Result<Decimal, FoodOrderError> {
        let menu_item = self
            .0
            .get(*item)
            .await
            .map_err(|e| FoodOrderError::ActorCommunicationError(e.to_string()))?
            .ok_or(FoodOrderError::MenuItemNotFound(*item))?;
        if !menu_item.is_available {
            return Err(FoodOrderError::MenuItemUnavailable(menu_item.name));
        }
        Ok(menu_item.price)
    }
}

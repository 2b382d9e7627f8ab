//! Purchase pricing: a purchase-order line costs the inventory item's unit price.

use super::error::PurchaseOrderError;
use crate::clients::InventoryClient;
use crate::model::InventoryItemId;
use crate::ordering::PriceCatalog;
use async_trait::async_trait;
use resource_actor::ActorClient;
use rust_decimal::Decimal;

pub struct InventoryCatalog<'a>(pub &'a InventoryClient);

#[async_trait]
impl<'a> PriceCatalog for InventoryCatalog<'a> {
    type ItemId = InventoryItemId;
    type Error = PurchaseOrderError;

    async fn unit_price(&self, item: &InventoryItemId) -> Result<Decimal, PurchaseOrderError> {
        self.0
            .get(*item)
            .await?
            .map(|stocked| stocked.price)
            .ok_or(PurchaseOrderError::InventoryItemNotFound(*item))
    }
}

//! # Inventory Client
//!
//! Stock only moves through the inventory actor's ledger actions. A purchase-order
//! receipt is sent as one `transact` request so that either every line is credited
//! or none is.

use super::recover_error;
use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{
    InventoryItem, InventoryItemCreate, InventoryItemId, InventoryItemUpdate,
    InventoryTransaction, OrderLine, PurchaseOrderId, UserId,
};
use async_trait::async_trait;
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

fn unexpected(result: &InventoryActionResult) -> InventoryError {
    InventoryError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_item(
        &self,
        params: InventoryItemCreate,
    ) -> Result<InventoryItemId, InventoryError> {
        debug!("Sending create to inventory actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: InventoryItemId,
        update: InventoryItemUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    async fn act(
        &self,
        id: InventoryItemId,
        action: InventoryAction,
    ) -> Result<InventoryActionResult, InventoryError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: InventoryItemId) -> Result<u32, InventoryError> {
        match self.act(id, InventoryAction::CheckStock).await? {
            InventoryActionResult::CheckStock(quantity) => Ok(quantity),
            other => Err(unexpected(&other)),
        }
    }

    /// Sets the stock to `new_quantity`. Returns the ledger entry written, or `None`
    /// when the quantity was already correct.
    #[instrument(skip(self, notes))]
    pub async fn adjust_quantity(
        &self,
        id: InventoryItemId,
        new_quantity: u32,
        actor: UserId,
        notes: impl Into<String>,
    ) -> Result<Option<InventoryTransaction>, InventoryError> {
        let action = InventoryAction::Adjust {
            new_quantity,
            actor,
            notes: notes.into(),
        };
        match self.act(id, action).await? {
            InventoryActionResult::Adjust(entry) => Ok(entry),
            other => Err(unexpected(&other)),
        }
    }

    #[instrument(skip(self, notes))]
    pub async fn consume(
        &self,
        id: InventoryItemId,
        quantity: u32,
        actor: UserId,
        notes: impl Into<String>,
    ) -> Result<InventoryTransaction, InventoryError> {
        let action = InventoryAction::Consume {
            quantity,
            actor,
            notes: notes.into(),
        };
        match self.act(id, action).await? {
            InventoryActionResult::Consume(entry) => Ok(entry),
            other => Err(unexpected(&other)),
        }
    }

    /// Credits every line of a purchase order in a single inventory transaction.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn apply_purchase_receipt(
        &self,
        purchase_order: PurchaseOrderId,
        lines: &[OrderLine<InventoryItemId>],
        actor: UserId,
    ) -> Result<Vec<InventoryTransaction>, InventoryError> {
        let ops = lines
            .iter()
            .map(|line| {
                (
                    line.item_id,
                    InventoryAction::ReceivePurchase {
                        purchase_order,
                        quantity: line.quantity,
                        actor,
                    },
                )
            })
            .collect();

        let results = self.inner.transact(ops).await.map_err(Self::map_error)?;
        let entries = results
            .into_iter()
            .map(|result| match result {
                InventoryActionResult::ReceivePurchase(entry) => Ok(entry),
                other => Err(unexpected(&other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!(po = %purchase_order, entries = entries.len(), "Receipt applied to inventory");
        Ok(entries)
    }

    /// The ledger of one item, oldest first.
    pub async fn transactions(
        &self,
        id: InventoryItemId,
    ) -> Result<Vec<InventoryTransaction>, InventoryError> {
        self.get(id)
            .await?
            .map(|item| item.ledger)
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))
    }

    /// Items below their threshold, emptiest first.
    pub async fn list_low_stock(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let mut items = self.list(Filter::new(InventoryItem::is_low_stock)).await?;
        items.sort_by(InventoryItem::cmp_stock_level);
        Ok(items)
    }

    pub async fn list_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<InventoryItem>, InventoryError> {
        let category = category.to_owned();
        self.list(Filter::new(move |item: &InventoryItem| item.category == category))
            .await
    }

    pub async fn list_items(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        self.list(Filter::all()).await
    }

    /// Distinct categories, sorted.
    pub async fn categories(&self) -> Result<Vec<String>, InventoryError> {
        let items = self.list_items().await?;
        Ok(items
            .into_iter()
            .map(|item| item.category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(
            e,
            InventoryError::NotFound,
            InventoryError::ActorCommunicationError,
        )
    }
}

//! [`ActorEntity`] implementation for [`PurchaseOrder`].
//!
//! Receiving is the only transition with side effects. The legality check runs
//! first, then every line is credited to inventory in one inventory transaction,
//! and only then is the new status committed. The purchase-order actor handles one
//! message at a time, so a second receive always sees `Received` and is rejected
//! before touching stock.

use super::actions::PurchaseOrderAction;
use super::catalog::InventoryCatalog;
use super::error::PurchaseOrderError;
use crate::clients::{InventoryClient, SupplierClient};
use crate::clock::SharedClock;
use crate::model::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderId, PurchaseOrderStatus, StatusMachine,
};
use crate::ordering::{draft_lines, price_lines};
use async_trait::async_trait;
use chrono::DateTime;
use resource_actor::{ActorClient, ActorEntity};
use rust_decimal::Decimal;
use tracing::info;

#[async_trait]
impl ActorEntity for PurchaseOrder {
    type Id = PurchaseOrderId;
    type Create = PurchaseOrderCreate;
    type Update = ();
    type Action = PurchaseOrderAction;
    type ActionResult = PurchaseOrder;
    type Context = (SupplierClient, InventoryClient, SharedClock);
    type Error = PurchaseOrderError;

    fn from_create_params(
        id: PurchaseOrderId,
        params: PurchaseOrderCreate,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            supplier_id: params.supplier_id,
            status: PurchaseOrderStatus::Pending,
            lines: draft_lines(params.lines)?,
            total_price: Decimal::ZERO,
            notes: params.notes,
            order_date: DateTime::UNIX_EPOCH,
            delivery_date: None,
            created_by: params.created_by,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (suppliers, inventory, clock) = ctx;

        let supplier = suppliers
            .get(self.supplier_id)
            .await
            .map_err(|e| PurchaseOrderError::ActorCommunicationError(e.to_string()))?
            .ok_or(PurchaseOrderError::SupplierNotFound(self.supplier_id))?;
        if !supplier.is_active {
            return Err(PurchaseOrderError::SupplierInactive(supplier.id));
        }

        self.total_price = price_lines(&InventoryCatalog(inventory), &mut self.lines).await?;
        self.order_date = clock.now();
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PurchaseOrderAction,
        ctx: &Self::Context,
    ) -> Result<PurchaseOrder, Self::Error> {
        let (_, inventory, clock) = ctx;
        match action {
            PurchaseOrderAction::Transition { to, actor } => {
                let next = self.status.transition(to)?;
                if next == PurchaseOrderStatus::Received {
                    let entries = inventory
                        .apply_purchase_receipt(self.id, &self.lines, actor)
                        .await?;
                    info!(po = %self.id, entries = entries.len(), "Purchase order received into inventory");
                    self.delivery_date = Some(clock.now());
                }
                self.status = next;
            }
        }
        Ok(self.clone())
    }
}

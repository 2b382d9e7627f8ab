//! Stock movements for the Inventory actor.
//!
//! Every action that changes `quantity` appends exactly one ledger entry in the same
//! step, so the ledger always sums to the stored quantity.

use crate::model::{InventoryTransaction, PurchaseOrderId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryAction {
    /// Returns the current quantity without modifying it.
    CheckStock,
    /// Sets the quantity to an absolute value (a stock count). A zero delta writes
    /// no ledger entry.
    Adjust {
        new_quantity: u32,
        actor: UserId,
        notes: String,
    },
    /// Credits a received purchase-order line.
    ReceivePurchase {
        purchase_order: PurchaseOrderId,
        quantity: u32,
        actor: UserId,
    },
    /// Takes stock out for use. Fails if not enough is on hand.
    Consume {
        quantity: u32,
        actor: UserId,
        notes: String,
    },
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    CheckStock(u32),
    Adjust(Option<InventoryTransaction>),
    ReceivePurchase(InventoryTransaction),
    Consume(InventoryTransaction),
}

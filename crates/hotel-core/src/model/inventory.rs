use crate::model::{PurchaseOrderId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

resource_id!(InventoryItemId, "item");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionSource {
    PurchaseOrder,
    Adjustment,
    Consumption,
}

/// Ledger entry identifier, unique within one item: `item_3/txn_2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId {
    pub item_id: InventoryItemId,
    pub seq: u32,
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/txn_{}", self.item_id, self.seq)
    }
}

/// One append-only stock movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryTransaction {
    pub id: TransactionId,
    pub item_id: InventoryItemId,
    /// Magnitude; the direction is carried by `kind`.
    pub quantity: u32,
    pub kind: TransactionType,
    pub source: TransactionSource,
    pub source_id: Option<PurchaseOrderId>,
    pub notes: String,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl InventoryTransaction {
    pub fn signed_quantity(&self) -> i64 {
        match self.kind {
            TransactionType::In => i64::from(self.quantity),
            TransactionType::Out => -i64::from(self.quantity),
        }
    }
}

/// A stocked item and its full movement history.
///
/// `quantity` is only ever changed together with an entry appended to `ledger`,
/// so [`InventoryItem::ledger_balance`] always equals it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub unit: String,
    pub quantity: u32,
    /// Low-stock threshold.
    pub min_quantity: u32,
    pub price: Decimal,
    pub ledger: Vec<InventoryTransaction>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.quantity < self.min_quantity
    }

    /// Sum of the ledger, `in` positive and `out` negative.
    pub fn ledger_balance(&self) -> i64 {
        self.ledger.iter().map(InventoryTransaction::signed_quantity).sum()
    }

    /// Orders by fill ratio `quantity / min_quantity`, then category, then name.
    ///
    /// Ratios are compared by cross-multiplying, so no precision is lost and an
    /// empty shelf always sorts first.
    pub fn cmp_stock_level(&self, other: &Self) -> Ordering {
        let lhs = u64::from(self.quantity) * u64::from(other.min_quantity);
        let rhs = u64::from(other.quantity) * u64::from(self.min_quantity);
        lhs.cmp(&rhs)
            .then_with(|| self.category.cmp(&other.category))
            .then_with(|| self.name.cmp(&other.name))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemCreate {
    pub name: String,
    pub category: String,
    pub description: String,
    pub unit: String,
    /// Opening stock, recorded as the first ledger entry when non-zero.
    pub quantity: u32,
    pub min_quantity: u32,
    pub price: Decimal,
    pub created_by: UserId,
}

/// Catalog fields only; stock moves through the ledger actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub min_quantity: Option<u32>,
    pub price: Option<Decimal>,
}

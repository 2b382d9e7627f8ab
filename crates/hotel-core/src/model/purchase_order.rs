use crate::model::{
    lines_total, InventoryItemId, LineRequest, OrderLine, StatusMachine, SupplierId, UserId,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

resource_id!(PurchaseOrderId, "po");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    Pending,
    Approved,
    Received,
    Cancelled,
}

impl StatusMachine for PurchaseOrderStatus {
    const TRANSITIONS: &'static [(Self, Self)] = &[
        (PurchaseOrderStatus::Pending, PurchaseOrderStatus::Approved),
        (PurchaseOrderStatus::Pending, PurchaseOrderStatus::Cancelled),
        (PurchaseOrderStatus::Approved, PurchaseOrderStatus::Received),
        (PurchaseOrderStatus::Approved, PurchaseOrderStatus::Cancelled),
    ];
}

impl fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PurchaseOrderStatus::Pending => "pending",
            PurchaseOrderStatus::Approved => "approved",
            PurchaseOrderStatus::Received => "received",
            PurchaseOrderStatus::Cancelled => "cancelled",
        })
    }
}

/// An order placed with a supplier. Receiving it credits inventory exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub supplier_id: SupplierId,
    pub status: PurchaseOrderStatus,
    pub lines: Vec<OrderLine<InventoryItemId>>,
    pub total_price: Decimal,
    pub notes: String,
    pub order_date: DateTime<Utc>,
    /// Set when the order is received.
    pub delivery_date: Option<DateTime<Utc>>,
    pub created_by: UserId,
}

impl PurchaseOrder {
    pub fn lines_total(&self) -> Decimal {
        lines_total(&self.lines)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrderCreate {
    pub supplier_id: SupplierId,
    pub lines: Vec<LineRequest<InventoryItemId>>,
    pub notes: String,
    pub created_by: UserId,
}

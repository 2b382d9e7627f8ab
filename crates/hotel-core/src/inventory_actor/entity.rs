//! [`ActorEntity`] implementation for [`InventoryItem`].

use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;
use crate::clock::SharedClock;
use crate::model::{
    InventoryItem, InventoryItemCreate, InventoryItemId, InventoryItemUpdate,
    InventoryTransaction, PurchaseOrderId, TransactionId, TransactionSource, TransactionType,
    UserId,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::ActorEntity;
use rust_decimal::Decimal;

/// A stock movement about to be written.
struct Movement {
    kind: TransactionType,
    quantity: u32,
    source: TransactionSource,
    source_id: Option<PurchaseOrderId>,
    notes: String,
    actor: UserId,
}

impl InventoryItem {
    fn validate(&self) -> Result<(), InventoryError> {
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("unit", &self.unit),
        ] {
            if value.trim().is_empty() {
                return Err(InventoryError::ValidationError(format!("{field} is required")));
            }
        }
        if self.price < Decimal::ZERO {
            return Err(InventoryError::ValidationError(format!(
                "price must not be negative, got {}",
                self.price
            )));
        }
        Ok(())
    }

    /// Applies `movement` to `quantity` and appends the matching ledger entry.
    fn record(
        &mut self,
        movement: Movement,
        now: DateTime<Utc>,
    ) -> Result<InventoryTransaction, InventoryError> {
        let seq = next_seq(self.ledger.len())?;
        self.quantity = match movement.kind {
            TransactionType::In => self.quantity.checked_add(movement.quantity).ok_or_else(|| {
                InventoryError::ValidationError(format!(
                    "quantity overflow: {} + {}",
                    self.quantity, movement.quantity
                ))
            })?,
            TransactionType::Out => self.quantity.checked_sub(movement.quantity).ok_or(
                InventoryError::InsufficientStock {
                    requested: movement.quantity,
                    available: self.quantity,
                },
            )?,
        };

        let entry = InventoryTransaction {
            id: TransactionId {
                item_id: self.id,
                seq,
            },
            item_id: self.id,
            quantity: movement.quantity,
            kind: movement.kind,
            source: movement.source,
            source_id: movement.source_id,
            notes: movement.notes,
            created_by: movement.actor,
            created_at: now,
        };
        self.ledger.push(entry.clone());
        Ok(entry)
    }
}

/// Ledger sequence numbers start at 1.
fn next_seq(len: usize) -> Result<u32, InventoryError> {
    len.checked_add(1)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| InventoryError::ValidationError(format!("ledger full at {len} entries")))
}

fn require_positive(quantity: u32) -> Result<(), InventoryError> {
    if quantity == 0 {
        return Err(InventoryError::ValidationError(
            "quantity must be at least 1".into(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = InventoryItemId;
    type Create = InventoryItemCreate;
    type Update = InventoryItemUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = SharedClock;
    type Error = InventoryError;

    fn from_create_params(
        id: InventoryItemId,
        params: InventoryItemCreate,
    ) -> Result<Self, Self::Error> {
        let item = Self {
            id,
            name: params.name,
            category: params.category,
            description: params.description,
            unit: params.unit,
            quantity: params.quantity,
            min_quantity: params.min_quantity,
            price: params.price,
            ledger: Vec::new(),
            created_by: params.created_by,
            created_at: DateTime::UNIX_EPOCH,
        };
        item.validate()?;
        Ok(item)
    }

    /// Moves the requested opening stock through the ledger so the balance
    /// reconciles from the first entry.
    async fn on_create(&mut self, clock: &SharedClock) -> Result<(), Self::Error> {
        let now = clock.now();
        self.created_at = now;

        let opening = std::mem::take(&mut self.quantity);
        if opening > 0 {
            self.record(
                Movement {
                    kind: TransactionType::In,
                    quantity: opening,
                    source: TransactionSource::Adjustment,
                    source_id: None,
                    notes: "opening balance".into(),
                    actor: self.created_by,
                },
                now,
            )?;
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: InventoryItemUpdate,
        _ctx: &SharedClock,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(min_quantity) = update.min_quantity {
            self.min_quantity = min_quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        self.validate()
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        clock: &SharedClock,
    ) -> Result<InventoryActionResult, Self::Error> {
        let now = clock.now();
        match action {
            InventoryAction::CheckStock => Ok(InventoryActionResult::CheckStock(self.quantity)),
            InventoryAction::Adjust {
                new_quantity,
                actor,
                notes,
            } => {
                let (kind, delta) = if new_quantity >= self.quantity {
                    (TransactionType::In, new_quantity - self.quantity)
                } else {
                    (TransactionType::Out, self.quantity - new_quantity)
                };
                if delta == 0 {
                    return Ok(InventoryActionResult::Adjust(None));
                }
                let entry = self.record(
                    Movement {
                        kind,
                        quantity: delta,
                        source: TransactionSource::Adjustment,
                        source_id: None,
                        notes,
                        actor,
                    },
                    now,
                )?;
                Ok(InventoryActionResult::Adjust(Some(entry)))
            }
            InventoryAction::ReceivePurchase {
                purchase_order,
                quantity,
                actor,
            } => {
                require_positive(quantity)?;
                let entry = self.record(
                    Movement {
                        kind: TransactionType::In,
                        quantity,
                        source: TransactionSource::PurchaseOrder,
                        source_id: Some(purchase_order),
                        notes: format!("received from {purchase_order}"),
                        actor,
                    },
                    now,
                )?;
                Ok(InventoryActionResult::ReceivePurchase(entry))
            }
            InventoryAction::Consume {
                quantity,
                actor,
                notes,
            } => {
                require_positive(quantity)?;
                let entry = self.record(
                    Movement {
                        kind: TransactionType::Out,
                        quantity,
                        source: TransactionSource::Consumption,
                        source_id: None,
                        notes,
                        actor,
                    },
                    now,
                )?;
                Ok(InventoryActionResult::Consume(entry))
            }
        }
    }
}

//! # Inventory Actor
//!
//! The stock ledger. Each [`InventoryItem`] carries its current quantity together
//! with the append-only list of movements that produced it.
//!
//! - [`entity`] - ledger bookkeeping
//! - [`actions`] - [`InventoryAction`] and [`InventoryActionResult`]
//! - [`error`] - [`InventoryError`]
//!
//! Purchase receipts arrive as a single transaction over several items, see
//! [`InventoryClient::apply_purchase_receipt`](crate::clients::InventoryClient::apply_purchase_receipt).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::InventoryItem;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Inventory actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<InventoryItem>, ResourceClient<InventoryItem>) {
    ResourceActor::new(buffer_size)
}

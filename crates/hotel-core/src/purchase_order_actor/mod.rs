//! # Purchase Order Actor
//!
//! Orders placed with suppliers, and the `pending → approved → received` state
//! machine that credits inventory on receipt.
//!
//! Context: `(SupplierClient, InventoryClient, SharedClock)`.

pub mod actions;
pub mod catalog;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::PurchaseOrder;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new PurchaseOrder actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<PurchaseOrder>, ResourceClient<PurchaseOrder>) {
    ResourceActor::new(buffer_size)
}

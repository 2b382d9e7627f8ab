//! Error types for the PurchaseOrder actor.

use crate::error::{Categorized, ErrorKind};
use crate::inventory_actor::InventoryError;
use crate::model::{InventoryItemId, PurchaseOrderStatus, SupplierId, TransitionError};
use crate::ordering::LineError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PurchaseOrderError {
    #[error("Purchase order not found: {0}")]
    NotFound(String),

    #[error("Purchase order validation error: {0}")]
    ValidationError(String),

    #[error("Supplier not found: {0}")]
    SupplierNotFound(SupplierId),

    #[error("supplier is not active: {0}")]
    SupplierInactive(SupplierId),

    #[error("Inventory item not found: {0}")]
    InventoryItemNotFound(InventoryItemId),

    #[error("order is in a terminal state: {0}")]
    TerminalState(PurchaseOrderStatus),

    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: PurchaseOrderStatus,
        to: PurchaseOrderStatus,
    },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for PurchaseOrderError {
    fn from(msg: String) -> Self {
        PurchaseOrderError::ActorCommunicationError(msg)
    }
}

impl From<LineError> for PurchaseOrderError {
    fn from(err: LineError) -> Self {
        PurchaseOrderError::ValidationError(err.to_string())
    }
}

impl From<TransitionError<PurchaseOrderStatus>> for PurchaseOrderError {
    fn from(err: TransitionError<PurchaseOrderStatus>) -> Self {
        match err {
            TransitionError::Terminal { from } => PurchaseOrderError::TerminalState(from),
            TransitionError::Illegal { from, to } => {
                PurchaseOrderError::InvalidTransition { from, to }
            }
        }
    }
}

impl Categorized for PurchaseOrderError {
    fn kind(&self) -> ErrorKind {
        match self {
            PurchaseOrderError::NotFound(_)
            | PurchaseOrderError::SupplierNotFound(_)
            | PurchaseOrderError::InventoryItemNotFound(_) => ErrorKind::NotFound,
            PurchaseOrderError::ValidationError(_) => ErrorKind::Validation,
            PurchaseOrderError::SupplierInactive(_)
            | PurchaseOrderError::InvalidTransition { .. } => ErrorKind::Conflict,
            PurchaseOrderError::TerminalState(_) => ErrorKind::State,
            PurchaseOrderError::Inventory(inner) => inner.kind(),
            PurchaseOrderError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}

//! Error types for the Inventory actor.

use crate::error::{Categorized, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Inventory item not found: {0}")]
    NotFound(String),

    #[error("Inventory validation error: {0}")]
    ValidationError(String),

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}

impl Categorized for InventoryError {
    fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::NotFound(_) => ErrorKind::NotFound,
            InventoryError::ValidationError(_) => ErrorKind::Validation,
            InventoryError::InsufficientStock { .. } => ErrorKind::Conflict,
            InventoryError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}

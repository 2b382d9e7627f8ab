//! Error types for the Supplier actor.

use crate::error::{Categorized, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SupplierError {
    #[error("Supplier not found: {0}")]
    NotFound(String),

    #[error("Supplier validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SupplierError {
    fn from(msg: String) -> Self {
        SupplierError::ActorCommunicationError(msg)
    }
}

impl Categorized for SupplierError {
    fn kind(&self) -> ErrorKind {
        match self {
            SupplierError::NotFound(_) => ErrorKind::NotFound,
            SupplierError::ValidationError(_) => ErrorKind::Validation,
            SupplierError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}

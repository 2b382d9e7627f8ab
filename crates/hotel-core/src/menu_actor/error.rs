//! Error types for the Menu actor.

use crate::error::{Categorized, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu item not found: {0}")]
    NotFound(String),

    #[error("Menu item validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunicationError(msg)
    }
}

impl Categorized for MenuError {
    fn kind(&self) -> ErrorKind {
        match self {
            MenuError::NotFound(_) => ErrorKind::NotFound,
            MenuError::ValidationError(_) => ErrorKind::Validation,
            MenuError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}

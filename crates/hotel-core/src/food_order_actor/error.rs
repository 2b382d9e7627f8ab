//! Error types for the FoodOrder actor.

use crate::error::{Categorized, ErrorKind};
use crate::model::{FoodOrderStatus, MenuItemId, RoomId, TransitionError};
use crate::ordering::LineError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodOrderError {
    #[error("Food order not found: {0}")]
    NotFound(String),

    #[error("Food order validation error: {0}")]
    ValidationError(String),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(MenuItemId),

    #[error("menu item is not available: {0}")]
    MenuItemUnavailable(String),

    #[error("order is in a terminal state: {0}")]
    TerminalState(FoodOrderStatus),

    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: FoodOrderStatus,
        to: FoodOrderStatus,
    },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for FoodOrderError {
    fn from(msg: String) -> Self {
        FoodOrderError::ActorCommunicationError(msg)
    }
}

impl From<LineError> for FoodOrderError {
    fn from(err: LineError) -> Self {
        FoodOrderError::ValidationError(err.to_string())
    }
}

impl From<TransitionError<FoodOrderStatus>> for FoodOrderError {
    fn from(err: TransitionError<FoodOrderStatus>) -> Self {
        match err {
            TransitionError::Terminal { from } => FoodOrderError::TerminalState(from),
            TransitionError::Illegal { from, to } => FoodOrderError::InvalidTransition { from, to },
        }
    }
}

impl Categorized for FoodOrderError {
    fn kind(&self) -> ErrorKind {
        match self {
            FoodOrderError::NotFound(_)
            | FoodOrderError::RoomNotFound(_)
            | FoodOrderError::MenuItemNotFound(_) => ErrorKind::NotFound,
            FoodOrderError::ValidationError(_) => ErrorKind::Validation,
            FoodOrderError::MenuItemUnavailable(_) | FoodOrderError::InvalidTransition { .. } => {
                ErrorKind::Conflict
            }
            FoodOrderError::TerminalState(_) => ErrorKind::State,
            FoodOrderError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}

//! Error types for the Room actor.

use crate::error::{Categorized, ErrorKind};
use crate::model::RoomId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoomError {
    #[error("Room not found: {0}")]
    NotFound(String),

    #[error("Room validation error: {0}")]
    ValidationError(String),

    #[error("room number already exists: {0}")]
    DuplicateNumber(String),

    #[error("cannot delete room with bookings: {0}")]
    HasBookings(RoomId),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RoomError {
    fn from(msg: String) -> Self {
        RoomError::ActorCommunicationError(msg)
    }
}

impl Categorized for RoomError {
    fn kind(&self) -> ErrorKind {
        match self {
            RoomError::NotFound(_) => ErrorKind::NotFound,
            RoomError::ValidationError(_) => ErrorKind::Validation,
            RoomError::DuplicateNumber(_) | RoomError::HasBookings(_) => ErrorKind::Conflict,
            RoomError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}

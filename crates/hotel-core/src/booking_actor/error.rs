//! Error types for the Booking actor.

use crate::error::{Categorized, ErrorKind};
use crate::model::{BookingStatus, RoomId, RoomStatus, TransitionError};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),

    /// Bad interval, or a start date that is not in the future.
    #[error("Booking validation error: {0}")]
    ValidationError(String),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("room {room} is not available: {status}")]
    RoomUnavailable { room: RoomId, status: RoomStatus },

    #[error("room is not available for the given dates")]
    Overlap(RoomId),

    #[error("booking is not confirmed: {0}")]
    NotConfirmed(BookingStatus),

    #[error("cannot cancel a booking that has already started")]
    AlreadyStarted,

    #[error("cannot complete a booking before it starts")]
    NotStarted,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for BookingError {
    fn from(msg: String) -> Self {
        BookingError::ActorCommunicationError(msg)
    }
}

impl From<TransitionError<BookingStatus>> for BookingError {
    fn from(err: TransitionError<BookingStatus>) -> Self {
        match err {
            TransitionError::Terminal { from } | TransitionError::Illegal { from, .. } => {
                BookingError::NotConfirmed(from)
            }
        }
    }
}

impl Categorized for BookingError {
    fn kind(&self) -> ErrorKind {
        match self {
            BookingError::NotFound(_) | BookingError::RoomNotFound(_) => ErrorKind::NotFound,
            BookingError::ValidationError(_) => ErrorKind::Validation,
            BookingError::RoomUnavailable { .. }
            | BookingError::Overlap(_)
            | BookingError::AlreadyStarted
            | BookingError::NotStarted => ErrorKind::Conflict,
            BookingError::NotConfirmed(_) => ErrorKind::State,
            BookingError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}

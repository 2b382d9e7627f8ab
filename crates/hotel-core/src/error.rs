//! Error classification shared by every actor's error enum.
//!
//! Each resource keeps its own `thiserror` enum; [`Categorized`] maps its variants
//! onto the handful of kinds a caller actually branches on.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range input.
    Validation,
    /// A referenced record does not exist.
    NotFound,
    /// The request collides with current state: an overlapping booking, an illegal
    /// transition, a duplicate key, insufficient stock.
    Conflict,
    /// The entity is in a state that admits no further operations.
    State,
    /// The actor system itself failed (closed channel, dropped reply).
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::State => "state",
            ErrorKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

pub trait Categorized {
    fn kind(&self) -> ErrorKind;
}

//! # Booking Actor
//!
//! Interval-exclusive room booking.
//!
//! - [`availability`] - the interval conflict rules and night pricing
//! - [`entity`] - create/cancel/complete lifecycle for [`Booking`]
//! - [`actions`] - [`BookingAction`]
//! - [`error`] - [`BookingError`]
//!
//! The actor's context is `(RoomClient, SharedClock)`: the room actor is consulted
//! for existence, status and price, the clock for "start must be in the future".

pub mod actions;
pub mod availability;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Booking;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Booking actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Booking>, ResourceClient<Booking>) {
    ResourceActor::new(buffer_size)
}

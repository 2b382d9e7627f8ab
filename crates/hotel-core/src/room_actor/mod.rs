//! # Room Actor
//!
//! Owns every [`Room`]. Enforces field validation and room-number uniqueness; status
//! changes go through a regular update.
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Room`]
//! - [`error`] - [`RoomError`]
//!
//! Deleting a room is guarded by the booking actor's records, see
//! [`RoomClient::delete_room`](crate::clients::RoomClient::delete_room).

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Room;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Room actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Room>, ResourceClient<Room>) {
    ResourceActor::new(buffer_size)
}

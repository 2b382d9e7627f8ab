//! # Food Order Actor
//!
//! Room-service orders. Creating one prices every line against the live menu
//! (see [`catalog`]) and sets the total in the same step; nothing is stored unless
//! every line resolves.
//!
//! Context: `(MenuClient, RoomClient, SharedClock)`.

pub mod actions;
pub mod catalog;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::FoodOrder;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new FoodOrder actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<FoodOrder>, ResourceClient<FoodOrder>) {
    ResourceActor::new(buffer_size)
}

//! # Menu Actor
//!
//! The room-service catalog that food orders are priced against.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::MenuItem;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(buffer_size)
}

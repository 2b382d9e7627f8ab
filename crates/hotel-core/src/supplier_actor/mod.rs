//! # Supplier Actor
//!
//! Supplier contact records. Purchase orders may only be placed with an active supplier.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Supplier;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Supplier actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Supplier>, ResourceClient<Supplier>) {
    ResourceActor::new(buffer_size)
}

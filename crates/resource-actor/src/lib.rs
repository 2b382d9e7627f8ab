//! # Resource Actor
//!
//! Building blocks for type-safe, concurrent actor systems. Each resource type
//! (a room, a booking, an inventory item) is owned by exactly one [`ResourceActor`]
//! task that holds the entities in memory and processes requests one at a time.
//!
//! ## Why one actor per resource type?
//!
//! - Isolated state: no shared memory and no locks around the store
//! - Message-passing concurrency over Tokio channels
//! - Sequential processing: a request, including every `await` inside its hooks,
//!   completes before the next one starts, so check-then-act sequences are atomic
//!
//! Resources coordinate through **Action messages** and through clients injected as
//! the actor's context, never through shared state.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - business rules and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing, staging and commits
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Operations
//!
//! | Request | Semantics |
//! |---------|-----------|
//! | `create` | `from_create_params` → `on_create` → `check_constraints` → insert |
//! | `get` / `list` | clone out of the store; `list` takes a [`Filter`] |
//! | `update` | `on_update` + `check_constraints` on a staged clone, then commit |
//! | `delete` | `on_delete` may veto |
//! | `perform_action` | `handle_action` on a staged clone, then commit |
//! | `transact` | several actions, all committed or none |
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! Every actor is created first, then each one is started with the clients it needs:
//!
//! ```rust,ignore
//! let (room_actor, rooms) = ResourceActor::<Room>::new(32);
//! let (booking_actor, bookings) = ResourceActor::<Booking>::new(32);
//!
//! tokio::spawn(room_actor.run(()));
//! tokio::spawn(booking_actor.run((RoomClient::new(rooms.clone()), clock)));
//! ```
//!
//! Contexts must not form a cycle: an actor that (transitively) holds its own client
//! never sees its channel close and so never shuts down.
//!
//! ## Testing
//!
//! See [`mock`] for the expectation-based [`mock::MockClient`] and the raw channel
//! helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};

//! # System Lifecycle
//!
//! [`HotelSystem`] creates every actor, starts each one with the clients it depends
//! on, and shuts them all down again.
//!
//! ## Wiring
//!
//! Actors are created first and receive their collaborators at `run(context)`:
//!
//! | Actor | Context |
//! |-------|---------|
//! | rooms, menu, suppliers | `()` |
//! | inventory | `SharedClock` |
//! | bookings | `(RoomClient, SharedClock)` |
//! | food orders | `(MenuClient, RoomClient, SharedClock)` |
//! | purchase orders | `(SupplierClient, InventoryClient, SharedClock)` |
//!
//! The graph is acyclic. Room deletion needs the booking actor's records, so
//! [`RoomClient::delete_room`](crate::clients::RoomClient::delete_room) takes the
//! booking client as an argument instead of the room actor holding one.
//!
//! ## Shutdown
//!
//! Dropping every client closes the channels; an actor whose clients are all gone
//! leaves its loop and drops its context, which in turn releases the actors it
//! depended on. Clones of the clients kept elsewhere hold their actor open, so drop
//! them before calling [`HotelSystem::shutdown`].

pub mod hotel_system;

pub use hotel_system::*;

//! # Hotel Core
//!
//! The transactional core of a hotel: rooms and interval-exclusive bookings, menu
//! and food orders, suppliers, an inventory ledger, and purchase orders whose
//! receipt credits stock exactly once.
//!
//! Each resource is owned by one [`ResourceActor`](resource_actor::ResourceActor)
//! and reached through a typed client in [`clients`]. [`lifecycle::HotelSystem`]
//! wires them together.
//!
//! - [`model`]: records, identifiers, DTOs and the status machines
//! - [`ordering`]: multi-line order pricing shared by food and purchase orders
//! - `*_actor`: one [`ActorEntity`](resource_actor::ActorEntity) per resource with
//!   its errors and actions
//! - [`clock`], [`config`], [`error`]: time source, settings, error kinds

pub mod booking_actor;
pub mod clients;
pub mod clock;
pub mod config;
pub mod error;
pub mod food_order_actor;
pub mod inventory_actor;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod ordering;
pub mod purchase_order_actor;
pub mod room_actor;
pub mod supplier_actor;

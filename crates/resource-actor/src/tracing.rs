//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` fmt layer for the whole process.
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** that hides module paths; actors log an `entity_type` field instead
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown with the final store size
//! - **Entity Operations**: Create, Get, List, Update, Delete, Action and Transaction
//! - **Errors**: `warn!` with the entity ID and the hook's error message
//!
//! ```bash
//! RUST_LOG=debug cargo run -p hotel-core
//! ```
//!
//! With `RUST_LOG=info` a booking shows up as:
//!
//! ```text
//! INFO Created entity_type="Room" id=room_1 size=1
//! INFO Created entity_type="Booking" id=booking_1 size=1
//! WARN Create failed entity_type="Booking" error=room is not available for the given dates
//! ```

use tracing_subscriber::EnvFilter;

/// Initialises the global subscriber.
///
/// `RUST_LOG` wins when it is set and parses; otherwise `default_directive`
/// (e.g. `"info"` or `"hotel_core=debug"`) is used.
pub fn setup_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .init();
}

//! # Clients
//!
//! One typed client per resource actor. Each wraps a `ResourceClient<T>`, adds the
//! resource's domain operations, and inherits `get`, `list` and `delete` from
//! [`ActorClient`](resource_actor::ActorClient).
//!
//! Framework failures are mapped back into the resource's own error: a missing id
//! becomes its `NotFound`, an entity error raised inside the actor is recovered as
//! the original typed value, and anything else becomes `ActorCommunicationError`.

pub mod booking_client;
pub mod food_order_client;
pub mod inventory_client;
pub mod menu_client;
pub mod purchase_order_client;
pub mod room_client;
pub mod supplier_client;

pub use booking_client::BookingClient;
pub use food_order_client::FoodOrderClient;
pub use inventory_client::InventoryClient;
pub use menu_client::MenuClient;
pub use purchase_order_client::PurchaseOrderClient;
pub use room_client::RoomClient;
pub use supplier_client::SupplierClient;

use resource_actor::FrameworkError;

fn recover_error<E>(
    e: FrameworkError,
    not_found: impl FnOnce(String) -> E,
    communication: impl FnOnce(String) -> E,
) -> E
where
    E: std::error::Error + 'static,
{
    match e {
        FrameworkError::NotFound(id) => not_found(id),
        other => other
            .into_entity_error::<E>()
            .unwrap_or_else(|e| communication(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room_actor::RoomError;

    fn map(e: FrameworkError) -> RoomError {
        recover_error(e, RoomError::NotFound, RoomError::ActorCommunicationError)
    }

    #[test]
    fn test_recover_error_variants() {
        assert_eq!(
            map(FrameworkError::NotFound("room_4".into())),
            RoomError::NotFound("room_4".into())
        );
        assert_eq!(
            map(FrameworkError::EntityError(Box::new(RoomError::DuplicateNumber(
                "101".into()
            )))),
            RoomError::DuplicateNumber("101".into())
        );
        assert_eq!(
            map(FrameworkError::ActorClosed),
            RoomError::ActorCommunicationError("Actor closed".into())
        );
    }
}

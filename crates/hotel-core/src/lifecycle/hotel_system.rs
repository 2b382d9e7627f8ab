use crate::clients::{
    BookingClient, FoodOrderClient, InventoryClient, MenuClient, PurchaseOrderClient, RoomClient,
    SupplierClient,
};
use crate::clock::{SharedClock, SystemClock};
use crate::config::HotelConfig;
use crate::{
    booking_actor, food_order_actor, inventory_actor, menu_actor, purchase_order_actor,
    room_actor, supplier_actor,
};
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum LifecycleError {
    #[error("{actor} actor task failed: {source}")]
    ActorTaskFailed {
        actor: &'static str,
        #[source]
        source: JoinError,
    },
}

/// Every resource actor of the hotel, running, with a client for each.
///
/// ```ignore
/// let system = HotelSystem::new();
/// let room = system.rooms.create_room(params).await?;
/// system.shutdown().await?;
/// ```
pub struct HotelSystem {
    pub rooms: RoomClient,
    pub bookings: BookingClient,
    pub menu: MenuClient,
    pub food_orders: FoodOrderClient,
    pub suppliers: SupplierClient,
    pub inventory: InventoryClient,
    pub purchase_orders: PurchaseOrderClient,
    handles: Vec<(&'static str, JoinHandle<()>)>,
}

impl HotelSystem {
    /// Starts the system on the wall clock with default configuration.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self::with_config(&HotelConfig::default(), clock)
    }

    /// Must be called from within a Tokio runtime.
    pub fn with_config(config: &HotelConfig, clock: SharedClock) -> Self {
        let buffer = config.channel_buffer;

        // 1. Create actors
        let (room_actor, rooms) = room_actor::new(buffer);
        let (booking_actor, bookings) = booking_actor::new(buffer);
        let (menu_actor, menu) = menu_actor::new(buffer);
        let (food_order_actor, food_orders) = food_order_actor::new(buffer);
        let (supplier_actor, suppliers) = supplier_actor::new(buffer);
        let (inventory_actor, inventory) = inventory_actor::new(buffer);
        let (purchase_order_actor, purchase_orders) = purchase_order_actor::new(buffer);

        let rooms = RoomClient::new(rooms);
        let menu = MenuClient::new(menu);
        let suppliers = SupplierClient::new(suppliers);
        let inventory = InventoryClient::new(inventory);

        // 2. Start them, dependencies first
        let handles = vec![
            ("room", tokio::spawn(room_actor.run(()))),
            ("menu", tokio::spawn(menu_actor.run(()))),
            ("supplier", tokio::spawn(supplier_actor.run(()))),
            ("inventory", tokio::spawn(inventory_actor.run(clock.clone()))),
            (
                "booking",
                tokio::spawn(booking_actor.run((rooms.clone(), clock.clone()))),
            ),
            (
                "food_order",
                tokio::spawn(food_order_actor.run((menu.clone(), rooms.clone(), clock.clone()))),
            ),
            (
                "purchase_order",
                tokio::spawn(purchase_order_actor.run((suppliers.clone(), inventory.clone(), clock))),
            ),
        ];
        info!(channel_buffer = buffer, actors = handles.len(), "Hotel system started");

        Self {
            rooms,
            bookings: BookingClient::new(bookings),
            menu,
            food_orders: FoodOrderClient::new(food_orders),
            suppliers,
            inventory,
            purchase_orders: PurchaseOrderClient::new(purchase_orders),
            handles,
        }
    }

    /// Drops every client and waits for each actor task to finish.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down hotel system...");

        let Self {
            rooms,
            bookings,
            menu,
            food_orders,
            suppliers,
            inventory,
            purchase_orders,
            handles,
        } = self;
        drop((rooms, bookings, menu, food_orders, suppliers, inventory, purchase_orders));

        for (actor, handle) in handles {
            if let Err(source) = handle.await {
                error!(actor, "Actor task failed: {:?}", source);
                return Err(LifecycleError::ActorTaskFailed { actor, source });
            }
        }

        info!("Hotel system shutdown complete.");
        Ok(())
    }
}

impl Default for HotelSystem {
    fn default() -> Self {
        Self::new()
    }
}

//! Demo: runs one pass through each workflow of the hotel core against the wall
//! clock and logs what happens.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p hotel-core
//! HOTEL_LOG=hotel_core=debug HOTEL_CHANNEL_BUFFER=8 cargo run -p hotel-core
//! ```

use chrono::{Duration, Utc};
use hotel_core::clock::SystemClock;
use hotel_core::config::HotelConfig;
use hotel_core::error::Categorized;
use hotel_core::lifecycle::HotelSystem;
use hotel_core::model::{
    BookingCreate, FoodOrderCreate, InventoryItemCreate, LineRequest, MenuItemCreate,
    PurchaseOrderCreate, RoomCreate, SupplierCreate, UserId,
};
use resource_actor::tracing::setup_tracing;
use rust_decimal::Decimal;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = HotelConfig::from_env();
    setup_tracing(&config.log_filter);

    info!(?config, "Starting hotel core demo");
    let system = HotelSystem::with_config(&config, Arc::new(SystemClock));
    let guest = UserId(1);
    let staff = UserId(2);

    // Rooms and bookings
    async {
        let room = system
            .rooms
            .create_room(RoomCreate {
                number: "101".into(),
                room_type: "double".into(),
                floor: 1,
                description: "Courtyard view".into(),
                capacity: 2,
                price_per_night: Decimal::new(12000, 2),
            })
            .await?;

        let check_in = Utc::now() + Duration::days(1);
        let check_out = check_in + Duration::days(3);
        let booking = system
            .bookings
            .create_booking(BookingCreate {
                user_id: guest,
                room_id: room,
                start: check_in,
                end: check_out,
            })
            .await?;
        info!(%booking, "Stay booked");

        let clash = system
            .bookings
            .create_booking(BookingCreate {
                user_id: UserId(3),
                room_id: room,
                start: check_in + Duration::days(1),
                end: check_out + Duration::days(1),
            })
            .await;
        if let Err(e) = clash {
            warn!(kind = %e.kind(), error = %e, "Overlapping booking rejected");
        }
        Ok::<_, Box<dyn Error + Send + Sync>>(())
    }
    .instrument(tracing::info_span!("bookings"))
    .await?;

    // Room service
    async {
        let coffee = system
            .menu
            .create_menu_item(MenuItemCreate {
                name: "Coffee".into(),
                description: "Filter coffee".into(),
                category: "drinks".into(),
                price: Decimal::new(350, 2),
                is_available: true,
            })
            .await?;
        let toast = system
            .menu
            .create_menu_item(MenuItemCreate {
                name: "Toast".into(),
                description: "Sourdough, butter".into(),
                category: "breakfast".into(),
                price: Decimal::new(500, 2),
                is_available: true,
            })
            .await?;

        let order = system
            .food_orders
            .create_food_order(FoodOrderCreate {
                user_id: guest,
                room_id: None,
                lines: vec![LineRequest::new(coffee, 2), LineRequest::new(toast, 1)],
                notes: String::new(),
            })
            .await?;
        let order = system.food_orders.start_preparing(order).await?;
        info!(order = %order.id, total = %order.total_price, status = %order.status, "Food order in the kitchen");
        Ok::<_, Box<dyn Error + Send + Sync>>(())
    }
    .instrument(tracing::info_span!("food_orders"))
    .await?;

    // Purchasing
    async {
        let towels = system
            .inventory
            .create_item(InventoryItemCreate {
                name: "Bath towel".into(),
                category: "linen".into(),
                description: String::new(),
                unit: "piece".into(),
                quantity: 40,
                min_quantity: 50,
                price: Decimal::new(900, 2),
                created_by: staff,
            })
            .await?;
        let supplier = system
            .suppliers
            .create_supplier(SupplierCreate {
                name: "Linen & Co".into(),
                email: "orders@linen.example".into(),
                phone: "+1 555 0100".into(),
                address: "1 Mill Road".into(),
                description: String::new(),
            })
            .await?;

        let low = system.inventory.list_low_stock().await?;
        info!(items = low.len(), "Low stock before purchase");

        let po = system
            .purchase_orders
            .create_purchase_order(PurchaseOrderCreate {
                supplier_id: supplier,
                lines: vec![LineRequest::new(towels, 20)],
                notes: "monthly restock".into(),
                created_by: staff,
            })
            .await?;
        system.purchase_orders.approve(po, staff).await?;
        let po = system.purchase_orders.receive(po, staff).await?;
        info!(po = %po.id, total = %po.total_price, "Purchase order received");

        let stock = system.inventory.check_stock(towels).await?;
        info!(item = %towels, stock, "Stock after receipt");
        Ok::<_, Box<dyn Error + Send + Sync>>(())
    }
    .instrument(tracing::info_span!("purchasing"))
    .await?;

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}

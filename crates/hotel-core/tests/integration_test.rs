use chrono::{DateTime, Duration, TimeZone, Utc};
use hotel_core::booking_actor::BookingError;
use hotel_core::clock::ManualClock;
use hotel_core::error::{Categorized, ErrorKind};
use hotel_core::food_order_actor::FoodOrderError;
use hotel_core::inventory_actor::InventoryError;
use hotel_core::lifecycle::HotelSystem;
use hotel_core::model::{
    BookingCreate, BookingStatus, FoodOrderCreate, FoodOrderStatus, InventoryItemCreate,
    InventoryItemId, LineRequest, MenuItemCreate, MenuItemId, MenuItemUpdate, PurchaseOrderCreate,
    PurchaseOrderStatus, RoomCreate, RoomId, RoomStatus, SupplierCreate, SupplierId,
    SupplierUpdate, TransactionSource, TransactionType, UserId,
};
use hotel_core::purchase_order_actor::PurchaseOrderError;
use hotel_core::room_actor::RoomError;
use resource_actor::ActorClient;
use rust_decimal::Decimal;
use std::sync::Arc;

const GUEST: UserId = UserId(1);
const STAFF: UserId = UserId(2);

fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap()
}

/// A running system whose clock stands at 2025-01-01.
fn system() -> (HotelSystem, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(jan(1)));
    (HotelSystem::with_clock(clock.clone()), clock)
}

async fn add_room(system: &HotelSystem, number: &str) -> RoomId {
    system
        .rooms
        .create_room(RoomCreate {
            number: number.into(),
            room_type: "double".into(),
            floor: 1,
            description: String::new(),
            capacity: 2,
            price_per_night: Decimal::from(100),
        })
        .await
        .expect("Failed to create room")
}

fn stay(room: RoomId, start: DateTime<Utc>, end: DateTime<Utc>) -> BookingCreate {
    BookingCreate {
        user_id: GUEST,
        room_id: room,
        start,
        end,
    }
}

async fn add_menu_item(system: &HotelSystem, name: &str, price: i64) -> MenuItemId {
    system
        .menu
        .create_menu_item(MenuItemCreate {
            name: name.into(),
            description: String::new(),
            category: "kitchen".into(),
            price: Decimal::from(price),
            is_available: true,
        })
        .await
        .expect("Failed to create menu item")
}

async fn add_stock(system: &HotelSystem, name: &str, quantity: u32, min: u32) -> InventoryItemId {
    system
        .inventory
        .create_item(InventoryItemCreate {
            name: name.into(),
            category: "linen".into(),
            description: String::new(),
            unit: "piece".into(),
            quantity,
            min_quantity: min,
            price: Decimal::from(4),
            created_by: STAFF,
        })
        .await
        .expect("Failed to create inventory item")
}

async fn add_supplier(system: &HotelSystem) -> SupplierId {
    system
        .suppliers
        .create_supplier(SupplierCreate {
            name: "Linen & Co".into(),
            email: "orders@linen.example".into(),
            phone: "555-0100".into(),
            address: "1 Mill Road".into(),
            description: String::new(),
        })
        .await
        .expect("Failed to create supplier")
}

// --- Bookings ---

#[tokio::test]
async fn test_adjacent_stays_allowed_and_overlap_rejected() {
    let (system, _clock) = system();
    let room = add_room(&system, "101").await;

    let first = system
        .bookings
        .create_booking(stay(room, jan(10), jan(15)))
        .await
        .unwrap();
    let booking = system.bookings.get(first).await.unwrap().unwrap();
    assert_eq!(booking.total_price, Decimal::from(500));
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.created_at, jan(1));

    // checking in on the day the previous guest leaves
    system
        .bookings
        .create_booking(stay(room, jan(15), jan(20)))
        .await
        .expect("adjacent stay should be accepted");

    let err = system
        .bookings
        .create_booking(stay(room, jan(14), jan(16)))
        .await
        .unwrap_err();
    assert_eq!(err, BookingError::Overlap(room));
    assert_eq!(err.to_string(), "room is not available for the given dates");
    assert_eq!(err.kind(), ErrorKind::Conflict);

    assert!(!system
        .bookings
        .is_room_available(room, jan(12), jan(13))
        .await
        .unwrap());
    assert!(system
        .bookings
        .is_room_available(room, jan(20), jan(22))
        .await
        .unwrap());
    assert_eq!(system.bookings.list_by_room(room).await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_booking_validation() {
    let (system, _clock) = system();
    let room = add_room(&system, "101").await;

    let reversed = system
        .bookings
        .create_booking(stay(room, jan(5), jan(3)))
        .await
        .unwrap_err();
    assert_eq!(reversed.kind(), ErrorKind::Validation);

    let past = system
        .bookings
        .create_booking(stay(room, jan(1), jan(3)))
        .await
        .unwrap_err();
    assert_eq!(
        past,
        BookingError::ValidationError("start date must be in the future".into())
    );

    let missing = system
        .bookings
        .create_booking(stay(RoomId(99), jan(5), jan(6)))
        .await
        .unwrap_err();
    assert_eq!(missing, BookingError::RoomNotFound(RoomId(99)));

    system
        .rooms
        .set_status(room, RoomStatus::Maintenance)
        .await
        .unwrap();
    let closed = system
        .bookings
        .create_booking(stay(room, jan(5), jan(6)))
        .await
        .unwrap_err();
    assert!(matches!(closed, BookingError::RoomUnavailable { .. }));
}

#[tokio::test]
async fn test_concurrent_overlapping_bookings_admit_exactly_one() {
    let (system, _clock) = system();
    let room = add_room(&system, "101").await;

    let tasks: Vec<_> = (0..10)
        .map(|i| {
            let bookings = system.bookings.clone();
            tokio::spawn(async move {
                bookings
                    .create_booking(stay(room, jan(10) + Duration::hours(i), jan(12)))
                    .await
            })
        })
        .collect();

    let mut confirmed = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => confirmed += 1,
            Err(e) => assert_eq!(e, BookingError::Overlap(room)),
        }
    }
    assert_eq!(confirmed, 1);
    assert_eq!(system.bookings.list_bookings().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_cancellation_and_completion_rules() {
    let (system, clock) = system();
    let room = add_room(&system, "101").await;

    let early = system
        .bookings
        .create_booking(stay(room, jan(5), jan(7)))
        .await
        .unwrap();
    let cancelled = system.bookings.cancel_booking(early).await.unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    let again = system.bookings.cancel_booking(early).await.unwrap_err();
    assert_eq!(again, BookingError::NotConfirmed(BookingStatus::Cancelled));
    assert_eq!(again.kind(), ErrorKind::State);

    // the cancelled stay no longer blocks the room
    let id = system
        .bookings
        .create_booking(stay(room, jan(5), jan(7)))
        .await
        .unwrap();

    assert_eq!(
        system.bookings.complete_booking(id).await.unwrap_err(),
        BookingError::NotStarted
    );

    clock.set(jan(6));
    assert_eq!(
        system.bookings.cancel_booking(id).await.unwrap_err(),
        BookingError::AlreadyStarted
    );
    let completed = system.bookings.complete_booking(id).await.unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);
    assert!(system
        .bookings
        .is_room_available(room, jan(6), jan(7))
        .await
        .unwrap());
}

// --- Rooms ---

#[tokio::test]
async fn test_room_with_bookings_cannot_be_deleted() {
    let (system, _clock) = system();
    let booked = add_room(&system, "101").await;
    let spare = add_room(&system, "102").await;

    let id = system
        .bookings
        .create_booking(stay(booked, jan(3), jan(4)))
        .await
        .unwrap();
    system.bookings.cancel_booking(id).await.unwrap();

    // any booking counts, including a cancelled one
    let err = system
        .rooms
        .delete_room(booked, &system.bookings)
        .await
        .unwrap_err();
    assert_eq!(err, RoomError::HasBookings(booked));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    let room = system.rooms.get(booked).await.unwrap().unwrap();
    assert_eq!(room.status, RoomStatus::Available);

    system.rooms.delete_room(spare, &system.bookings).await.unwrap();
    assert!(system.rooms.get(spare).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_racing_a_booking_never_orphans_it() {
    let (system, _clock) = system();

    for i in 0..20 {
        let room = add_room(&system, &format!("3{i:02}")).await;

        let rooms = system.rooms.clone();
        let bookings = system.bookings.clone();
        let delete = tokio::spawn(async move { rooms.delete_room(room, &bookings).await });
        let bookings = system.bookings.clone();
        let book = tokio::spawn(async move {
            bookings
                .create_booking(stay(room, jan(10), jan(12)))
                .await
        });
        let deleted = delete.await.unwrap();
        let booked = book.await.unwrap();

        let stays = system.bookings.list_by_room(room).await.unwrap();
        match system.rooms.get(room).await.unwrap() {
            None => {
                assert!(deleted.is_ok());
                assert!(booked.is_err());
                assert!(stays.is_empty());
            }
            Some(left) => {
                assert_eq!(deleted.unwrap_err(), RoomError::HasBookings(room));
                assert!(booked.is_ok());
                assert_eq!(stays.len(), 1);
                assert_eq!(left.status, RoomStatus::Available);
            }
        }
    }
}

#[tokio::test]
async fn test_room_listings() {
    let (system, _clock) = system();
    let r201 = add_room(&system, "201").await;
    let r101 = add_room(&system, "101").await;
    let r102 = add_room(&system, "102").await;

    let duplicate = system
        .rooms
        .create_room(RoomCreate {
            number: "101".into(),
            room_type: "single".into(),
            floor: 1,
            description: String::new(),
            capacity: 1,
            price_per_night: Decimal::from(80),
        })
        .await
        .unwrap_err();
    assert_eq!(duplicate, RoomError::DuplicateNumber("101".into()));

    let numbers: Vec<_> = system
        .rooms
        .list_rooms()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.number)
        .collect();
    assert_eq!(numbers, vec!["101", "102", "201"]);

    system
        .bookings
        .create_booking(stay(r101, jan(10), jan(12)))
        .await
        .unwrap();
    system
        .rooms
        .set_status(r201, RoomStatus::Maintenance)
        .await
        .unwrap();

    let free: Vec<_> = system
        .rooms
        .list_available(jan(11), jan(13), &system.bookings)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(free, vec![r102]);

    let later = system
        .rooms
        .list_available(jan(12), jan(13), &system.bookings)
        .await
        .unwrap();
    assert_eq!(later.len(), 2);
}

// --- Food orders ---

#[tokio::test]
async fn test_food_order_total_is_sum_of_lines() {
    let (system, _clock) = system();
    let room = add_room(&system, "101").await;
    let a = add_menu_item(&system, "Pancakes", 10).await;
    let b = add_menu_item(&system, "Juice", 5).await;

    let id = system
        .food_orders
        .create_food_order(FoodOrderCreate {
            user_id: GUEST,
            room_id: Some(room),
            lines: vec![LineRequest::new(a, 2), LineRequest::new(b, 1).with_notes("no ice")],
            notes: "room service".into(),
        })
        .await
        .unwrap();

    let order = system.food_orders.get(id).await.unwrap().unwrap();
    assert_eq!(order.total_price, Decimal::from(25));
    assert_eq!(order.total_price, order.lines_total());
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[1].notes, "no ice");
    assert_eq!(order.status, FoodOrderStatus::Pending);

    let order = system.food_orders.start_preparing(id).await.unwrap();
    assert_eq!(order.status, FoodOrderStatus::Preparing);
    system.food_orders.deliver(id).await.unwrap();

    let err = system.food_orders.cancel(id).await.unwrap_err();
    assert_eq!(err, FoodOrderError::TerminalState(FoodOrderStatus::Delivered));
    assert_eq!(err.to_string(), "order is in a terminal state: delivered");
    assert_eq!(
        system
            .food_orders
            .list_by_status(FoodOrderStatus::Delivered)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_failed_line_leaves_no_order() {
    let (system, _clock) = system();
    let a = add_menu_item(&system, "Pancakes", 10).await;
    let b = add_menu_item(&system, "Juice", 5).await;

    let lines = vec![
        LineRequest::new(a, 1),
        LineRequest::new(b, 1),
        LineRequest::new(MenuItemId(42), 1),
        LineRequest::new(a, 1),
        LineRequest::new(b, 1),
    ];
    let err = system
        .food_orders
        .create_food_order(FoodOrderCreate {
            user_id: GUEST,
            room_id: None,
            lines,
            notes: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, FoodOrderError::MenuItemNotFound(MenuItemId(42)));
    assert!(system.food_orders.list_orders().await.unwrap().is_empty());

    system
        .menu
        .update_menu_item(
            b,
            MenuItemUpdate {
                is_available: Some(false),
                ..MenuItemUpdate::default()
            },
        )
        .await
        .unwrap();
    let err = system
        .food_orders
        .create_food_order(FoodOrderCreate {
            user_id: GUEST,
            room_id: None,
            lines: vec![LineRequest::new(a, 1), LineRequest::new(b, 1)],
            notes: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "menu item is not available: Juice");

    let empty = system
        .food_orders
        .create_food_order(FoodOrderCreate {
            user_id: GUEST,
            room_id: None,
            lines: vec![],
            notes: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(empty.kind(), ErrorKind::Validation);

    let unknown_room = system
        .food_orders
        .create_food_order(FoodOrderCreate {
            user_id: GUEST,
            room_id: Some(RoomId(7)),
            lines: vec![LineRequest::new(a, 1)],
            notes: String::new(),
        })
        .await
        .unwrap_err();
    assert_eq!(unknown_room, FoodOrderError::RoomNotFound(RoomId(7)));

    // failed creates did not consume ids
    let id = system
        .food_orders
        .create_food_order(FoodOrderCreate {
            user_id: GUEST,
            room_id: None,
            lines: vec![LineRequest::new(a, 3)],
            notes: String::new(),
        })
        .await
        .unwrap();
    assert_eq!(id.0, 1);
    assert_eq!(system.food_orders.list_by_user(GUEST).await.unwrap().len(), 1);
}

// --- Inventory ---

#[tokio::test]
async fn test_adjustment_writes_out_entry_and_flags_low_stock() {
    let (system, _clock) = system();
    let towels = add_stock(&system, "Towel", 100, 20).await;
    let sheets = add_stock(&system, "Sheet", 30, 10).await;

    let entry = system
        .inventory
        .adjust_quantity(towels, 15, STAFF, "stock count")
        .await
        .unwrap()
        .expect("a non-zero adjustment writes an entry");
    assert_eq!(entry.kind, TransactionType::Out);
    assert_eq!(entry.quantity, 85);
    assert_eq!(entry.source, TransactionSource::Adjustment);
    assert_eq!(entry.created_by, STAFF);

    let item = system.inventory.get(towels).await.unwrap().unwrap();
    assert_eq!(item.quantity, 15);
    assert_eq!(item.ledger_balance(), 15);
    assert!(item.is_low_stock());

    let low: Vec<_> = system
        .inventory
        .list_low_stock()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(low, vec![towels]);

    assert!(system
        .inventory
        .adjust_quantity(sheets, 30, STAFF, "")
        .await
        .unwrap()
        .is_none());
    assert_eq!(system.inventory.transactions(sheets).await.unwrap().len(), 1);

    let err = system
        .inventory
        .consume(towels, 16, STAFF, "housekeeping")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        InventoryError::InsufficientStock {
            requested: 16,
            available: 15
        }
    );
    system
        .inventory
        .consume(towels, 15, STAFF, "housekeeping")
        .await
        .unwrap();
    assert_eq!(system.inventory.check_stock(towels).await.unwrap(), 0);
    assert_eq!(system.inventory.categories().await.unwrap(), vec!["linen"]);
}

// --- Purchase orders ---

#[tokio::test]
async fn test_receive_credits_every_line_once() {
    let (system, clock) = system();
    let supplier = add_supplier(&system).await;
    let a = add_stock(&system, "Towel", 0, 10).await;
    let b = add_stock(&system, "Sheet", 10, 5).await;

    let po = system
        .purchase_orders
        .create_purchase_order(PurchaseOrderCreate {
            supplier_id: supplier,
            lines: vec![LineRequest::new(a, 5), LineRequest::new(b, 3)],
            notes: String::new(),
            created_by: STAFF,
        })
        .await
        .unwrap();
    let order = system.purchase_orders.get(po).await.unwrap().unwrap();
    assert_eq!(order.total_price, Decimal::from(32));
    assert_eq!(order.order_date, jan(1));

    let early = system.purchase_orders.receive(po, STAFF).await.unwrap_err();
    assert_eq!(
        early,
        PurchaseOrderError::InvalidTransition {
            from: PurchaseOrderStatus::Pending,
            to: PurchaseOrderStatus::Received,
        }
    );

    system.purchase_orders.approve(po, STAFF).await.unwrap();
    clock.set(jan(3));
    let received = system.purchase_orders.receive(po, STAFF).await.unwrap();
    assert_eq!(received.status, PurchaseOrderStatus::Received);
    assert_eq!(received.delivery_date, Some(jan(3)));

    assert_eq!(system.inventory.check_stock(a).await.unwrap(), 5);
    assert_eq!(system.inventory.check_stock(b).await.unwrap(), 13);

    let ledger = system.inventory.transactions(b).await.unwrap();
    let receipt = ledger.last().unwrap();
    assert_eq!(receipt.kind, TransactionType::In);
    assert_eq!(receipt.quantity, 3);
    assert_eq!(receipt.source, TransactionSource::PurchaseOrder);
    assert_eq!(receipt.source_id, Some(po));

    let again = system.purchase_orders.receive(po, STAFF).await.unwrap_err();
    assert_eq!(
        again,
        PurchaseOrderError::TerminalState(PurchaseOrderStatus::Received)
    );
    assert_eq!(again.kind(), ErrorKind::State);
    assert_eq!(system.inventory.check_stock(b).await.unwrap(), 13);
}

#[tokio::test]
async fn test_concurrent_receives_apply_once() {
    let (system, _clock) = system();
    let supplier = add_supplier(&system).await;
    let item = add_stock(&system, "Towel", 0, 10).await;

    let po = system
        .purchase_orders
        .create_purchase_order(PurchaseOrderCreate {
            supplier_id: supplier,
            lines: vec![LineRequest::new(item, 5)],
            notes: String::new(),
            created_by: STAFF,
        })
        .await
        .unwrap();
    system.purchase_orders.approve(po, STAFF).await.unwrap();

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let client = system.purchase_orders.clone();
            tokio::spawn(async move { client.receive(po, STAFF).await })
        })
        .collect();
    let mut received = 0;
    for task in tasks {
        if task.await.unwrap().is_ok() {
            received += 1;
        }
    }

    assert_eq!(received, 1);
    let stocked = system.inventory.get(item).await.unwrap().unwrap();
    assert_eq!(stocked.quantity, 5);
    assert_eq!(stocked.ledger.len(), 1);
}

#[tokio::test]
async fn test_failed_receipt_changes_nothing() {
    let (system, _clock) = system();
    let supplier = add_supplier(&system).await;
    let kept = add_stock(&system, "Towel", 2, 10).await;
    let gone = add_stock(&system, "Sheet", 0, 10).await;

    let po = system
        .purchase_orders
        .create_purchase_order(PurchaseOrderCreate {
            supplier_id: supplier,
            lines: vec![LineRequest::new(kept, 5), LineRequest::new(gone, 3)],
            notes: String::new(),
            created_by: STAFF,
        })
        .await
        .unwrap();
    system.purchase_orders.approve(po, STAFF).await.unwrap();
    system.inventory.delete(gone).await.unwrap();

    let err = system.purchase_orders.receive(po, STAFF).await.unwrap_err();
    assert!(matches!(
        err,
        PurchaseOrderError::Inventory(InventoryError::NotFound(_))
    ));
    assert_eq!(err.kind(), ErrorKind::NotFound);

    assert_eq!(system.inventory.check_stock(kept).await.unwrap(), 2);
    let order = system.purchase_orders.get(po).await.unwrap().unwrap();
    assert_eq!(order.status, PurchaseOrderStatus::Approved);
    assert!(order.delivery_date.is_none());

    let cancelled = system.purchase_orders.cancel(po, STAFF).await.unwrap();
    assert_eq!(cancelled.status, PurchaseOrderStatus::Cancelled);
}

#[tokio::test]
async fn test_purchase_order_requires_active_supplier_and_known_items() {
    let (system, _clock) = system();
    let supplier = add_supplier(&system).await;
    let item = add_stock(&system, "Towel", 0, 10).await;

    let unknown = system
        .purchase_orders
        .create_purchase_order(PurchaseOrderCreate {
            supplier_id: supplier,
            lines: vec![LineRequest::new(InventoryItemId(50), 1)],
            notes: String::new(),
            created_by: STAFF,
        })
        .await
        .unwrap_err();
    assert_eq!(
        unknown,
        PurchaseOrderError::InventoryItemNotFound(InventoryItemId(50))
    );

    system
        .suppliers
        .update_supplier(
            supplier,
            SupplierUpdate {
                is_active: Some(false),
                ..SupplierUpdate::default()
            },
        )
        .await
        .unwrap();
    assert!(system.suppliers.list_active().await.unwrap().is_empty());

    let inactive = system
        .purchase_orders
        .create_purchase_order(PurchaseOrderCreate {
            supplier_id: supplier,
            lines: vec![LineRequest::new(item, 1)],
            notes: String::new(),
            created_by: STAFF,
        })
        .await
        .unwrap_err();
    assert_eq!(inactive, PurchaseOrderError::SupplierInactive(supplier));

    assert!(system
        .purchase_orders
        .list_purchase_orders()
        .await
        .unwrap()
        .is_empty());

    system.shutdown().await.unwrap();
}

use crate::model::{lines_total, LineRequest, MenuItemId, OrderLine, RoomId, StatusMachine, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

resource_id!(FoodOrderId, "food_order");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodOrderStatus {
    Pending,
    Preparing,
    Delivered,
    Cancelled,
}

impl StatusMachine for FoodOrderStatus {
    const TRANSITIONS: &'static [(Self, Self)] = &[
        (FoodOrderStatus::Pending, FoodOrderStatus::Preparing),
        (FoodOrderStatus::Pending, FoodOrderStatus::Cancelled),
        (FoodOrderStatus::Preparing, FoodOrderStatus::Delivered),
        (FoodOrderStatus::Preparing, FoodOrderStatus::Cancelled),
    ];
}

impl fmt::Display for FoodOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FoodOrderStatus::Pending => "pending",
            FoodOrderStatus::Preparing => "preparing",
            FoodOrderStatus::Delivered => "delivered",
            FoodOrderStatus::Cancelled => "cancelled",
        })
    }
}

/// A room-service order. `total_price` always equals the sum of `lines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodOrder {
    pub id: FoodOrderId,
    pub user_id: UserId,
    /// Room to deliver to, if any.
    pub room_id: Option<RoomId>,
    pub status: FoodOrderStatus,
    pub lines: Vec<OrderLine<MenuItemId>>,
    pub total_price: Decimal,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl FoodOrder {
    pub fn lines_total(&self) -> Decimal {
        lines_total(&self.lines)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodOrderCreate {
    pub user_id: UserId,
    pub room_id: Option<RoomId>,
    pub lines: Vec<LineRequest<MenuItemId>>,
    pub notes: String,
}

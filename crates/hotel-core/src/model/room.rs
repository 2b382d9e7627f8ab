use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

resource_id!(RoomId, "room");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
        })
    }
}

/// A bookable room.
///
/// `number` is unique across all rooms; the room actor enforces it on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub number: String,
    pub room_type: String,
    pub floor: i32,
    pub description: String,
    pub capacity: u32,
    pub price_per_night: Decimal,
    pub status: RoomStatus,
}

/// Payload for creating a room. New rooms start out `available`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub number: String,
    pub room_type: String,
    pub floor: i32,
    pub description: String,
    pub capacity: u32,
    pub price_per_night: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomUpdate {
    pub number: Option<String>,
    pub room_type: Option<String>,
    pub floor: Option<i32>,
    pub description: Option<String>,
    pub capacity: Option<u32>,
    pub price_per_night: Option<Decimal>,
    pub status: Option<RoomStatus>,
}

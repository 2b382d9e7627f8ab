//! [`ActorEntity`] implementation for [`Room`].

use super::error::RoomError;
use crate::model::{Room, RoomCreate, RoomId, RoomStatus, RoomUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use rust_decimal::Decimal;

impl Room {
    fn validate(&self) -> Result<(), RoomError> {
        if self.number.trim().is_empty() {
            return Err(RoomError::ValidationError("room number is required".into()));
        }
        if self.room_type.trim().is_empty() {
            return Err(RoomError::ValidationError("room type is required".into()));
        }
        if self.capacity == 0 {
            return Err(RoomError::ValidationError(
                "capacity must be at least 1".into(),
            ));
        }
        if self.price_per_night < Decimal::ZERO {
            return Err(RoomError::ValidationError(format!(
                "price per night must not be negative, got {}",
                self.price_per_night
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Room {
    type Id = RoomId;
    type Create = RoomCreate;
    type Update = RoomUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = RoomError;

    fn from_create_params(id: RoomId, params: RoomCreate) -> Result<Self, Self::Error> {
        let room = Self {
            id,
            number: params.number,
            room_type: params.room_type,
            floor: params.floor,
            description: params.description,
            capacity: params.capacity,
            price_per_night: params.price_per_night,
            status: RoomStatus::Available,
        };
        room.validate()?;
        Ok(room)
    }

    /// Room numbers are unique.
    fn check_constraints(&self, others: &[&Self]) -> Result<(), Self::Error> {
        if others.iter().any(|other| other.number == self.number) {
            return Err(RoomError::DuplicateNumber(self.number.clone()));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: RoomUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(number) = update.number {
            self.number = number;
        }
        if let Some(room_type) = update.room_type {
            self.room_type = room_type;
        }
        if let Some(floor) = update.floor {
            self.floor = floor;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(capacity) = update.capacity {
            self.capacity = capacity;
        }
        if let Some(price) = update.price_per_night {
            self.price_per_night = price;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.validate()
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(number: &str) -> RoomCreate {
        RoomCreate {
            number: number.into(),
            room_type: "double".into(),
            floor: 1,
            description: String::new(),
            capacity: 2,
            price_per_night: Decimal::from(120),
        }
    }

    #[test]
    fn test_new_room_is_available() {
        let room = Room::from_create_params(RoomId(1), params("101")).unwrap();
        assert_eq!(room.status, RoomStatus::Available);
    }

    #[test]
    fn test_rejects_bad_fields() {
        let mut p = params("");
        assert!(matches!(
            Room::from_create_params(RoomId(1), p.clone()),
            Err(RoomError::ValidationError(_))
        ));

        p.number = "101".into();
        p.capacity = 0;
        assert!(Room::from_create_params(RoomId(1), p.clone()).is_err());

        p.capacity = 2;
        p.price_per_night = Decimal::from(-1);
        assert!(Room::from_create_params(RoomId(1), p).is_err());
    }

    #[test]
    fn test_duplicate_number_violates_constraints() {
        let a = Room::from_create_params(RoomId(1), params("101")).unwrap();
        let b = Room::from_create_params(RoomId(2), params("101")).unwrap();
        let c = Room::from_create_params(RoomId(3), params("102")).unwrap();

        assert_eq!(
            b.check_constraints(&[&a]),
            Err(RoomError::DuplicateNumber("101".into()))
        );
        assert!(c.check_constraints(&[&a, &b]).is_ok());
    }
}

//! [`ActorEntity`] implementation for [`Booking`].
//!
//! `on_create` validates the stay against the clock, checks the room and prices the
//! nights; `check_constraints` then rejects any overlap with a confirmed booking of
//! the same room. Both run inside the booking actor's single `Create` request, so
//! two overlapping requests can never both pass the check.

use super::actions::BookingAction;
use super::availability;
use super::error::BookingError;
use crate::clients::RoomClient;
use crate::clock::SharedClock;
use crate::model::{Booking, BookingCreate, BookingId, BookingStatus, RoomStatus, StatusMachine};
use async_trait::async_trait;
use chrono::DateTime;
use resource_actor::{ActorClient, ActorEntity};
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for Booking {
    type Id = BookingId;
    type Create = BookingCreate;
    type Update = ();
    type Action = BookingAction;
    type ActionResult = Booking;
    type Context = (RoomClient, SharedClock);
    type Error = BookingError;

    fn from_create_params(id: BookingId, params: BookingCreate) -> Result<Self, Self::Error> {
        availability::validate_interval(params.start, params.end)?;
        Ok(Self {
            id,
            room_id: params.room_id,
            user_id: params.user_id,
            start: params.start,
            end: params.end,
            total_price: Decimal::ZERO,
            status: BookingStatus::Confirmed,
            created_at: DateTime::UNIX_EPOCH,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (rooms, clock) = ctx;
        let now = clock.now();
        availability::validate_stay(self.start, self.end, now)?;

        let room = rooms
            .get(self.room_id)
            .await
            .map_err(|e| BookingError::ActorCommunicationError(e.to_string()))?
            .ok_or(BookingError::RoomNotFound(self.room_id))?;
        if room.status != RoomStatus::Available {
            return Err(BookingError::RoomUnavailable {
                room: room.id,
                status: room.status,
            });
        }

        let nights = availability::nights(self.start, self.end);
        self.total_price = room.price_per_night * Decimal::from(nights);
        self.created_at = now;
        Ok(())
    }

    fn check_constraints(&self, others: &[&Self]) -> Result<(), Self::Error> {
        if self.is_confirmed()
            && !availability::is_available(others.iter().copied(), self.room_id, self.start, self.end)
        {
            return Err(BookingError::Overlap(self.room_id));
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BookingAction,
        ctx: &Self::Context,
    ) -> Result<Booking, Self::Error> {
        let now = ctx.1.now();
        match action {
            BookingAction::Cancel => {
                let next = self.status.transition(BookingStatus::Cancelled)?;
                if self.start <= now {
                    return Err(BookingError::AlreadyStarted);
                }
                self.status = next;
            }
            BookingAction::Complete => {
                let next = self.status.transition(BookingStatus::Completed)?;
                if self.start > now {
                    return Err(BookingError::NotStarted);
                }
                self.status = next;
            }
        }
        Ok(self.clone())
    }
}

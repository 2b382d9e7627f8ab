//! # Booking Client
//!
//! Bookings are created through the booking actor so that the overlap check and the
//! insert are one step. Availability queries here are read-only snapshots.

use super::recover_error;
use crate::booking_actor::{availability, BookingAction, BookingError};
use crate::model::{Booking, BookingCreate, BookingId, RoomId, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct BookingClient {
    inner: ResourceClient<Booking>,
}

impl BookingClient {
    pub fn new(inner: ResourceClient<Booking>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_booking(&self, params: BookingCreate) -> Result<BookingId, BookingError> {
        debug!("Sending create to booking actor");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(booking = %id, "Booking confirmed");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn cancel_booking(&self, id: BookingId) -> Result<Booking, BookingError> {
        self.inner
            .perform_action(id, BookingAction::Cancel)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn complete_booking(&self, id: BookingId) -> Result<Booking, BookingError> {
        self.inner
            .perform_action(id, BookingAction::Complete)
            .await
            .map_err(Self::map_error)
    }

    /// `true` when no confirmed booking of `room` overlaps `[start, end)`.
    #[instrument(skip(self))]
    pub async fn is_room_available(
        &self,
        room: RoomId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, BookingError> {
        availability::validate_interval(start, end)?;
        let blocking = self
            .list(Filter::new(move |b: &Booking| {
                availability::conflicts(b, room, start, end)
            }))
            .await?;
        Ok(blocking.is_empty())
    }

    /// Confirmed bookings of any room that overlap `[start, end)`.
    #[instrument(skip(self))]
    pub async fn overlapping(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Booking>, BookingError> {
        self.list(Filter::new(move |b: &Booking| {
            availability::conflicts(b, b.room_id, start, end)
        }))
        .await
    }

    /// Whether any booking, whatever its status, references `room`.
    #[instrument(skip(self))]
    pub async fn has_bookings(&self, room: RoomId) -> Result<bool, BookingError> {
        Ok(!self.list_by_room(room).await?.is_empty())
    }

    pub async fn list_by_user(&self, user: UserId) -> Result<Vec<Booking>, BookingError> {
        self.list(Filter::new(move |b: &Booking| b.user_id == user))
            .await
    }

    pub async fn list_by_room(&self, room: RoomId) -> Result<Vec<Booking>, BookingError> {
        self.list(Filter::new(move |b: &Booking| b.room_id == room))
            .await
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        self.list(Filter::all()).await
    }
}

#[async_trait]
impl ActorClient<Booking> for BookingClient {
    type Error = BookingError;

    fn inner(&self) -> &ResourceClient<Booking> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(
            e,
            BookingError::NotFound,
            BookingError::ActorCommunicationError,
        )
    }
}

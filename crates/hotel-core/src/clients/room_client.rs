//! # Room Client

use super::{recover_error, BookingClient};
use crate::booking_actor::availability;
use crate::model::{Room, RoomCreate, RoomId, RoomStatus, RoomUpdate};
use crate::room_actor::RoomError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct RoomClient {
    inner: ResourceClient<Room>,
}

impl RoomClient {
    pub fn new(inner: ResourceClient<Room>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_room(&self, params: RoomCreate) -> Result<RoomId, RoomError> {
        debug!("Sending create to room actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_room(&self, id: RoomId, update: RoomUpdate) -> Result<Room, RoomError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_status(&self, id: RoomId, status: RoomStatus) -> Result<Room, RoomError> {
        let update = RoomUpdate {
            status: Some(status),
            ..RoomUpdate::default()
        };
        self.update_room(id, update).await
    }

    /// Every room, ordered by room number.
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<Vec<Room>, RoomError> {
        let mut rooms = self.list(Filter::all()).await?;
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }

    /// Deletes a room that has never been booked.
    ///
    /// An available room is first switched to `maintenance`, which makes the booking
    /// actor refuse new stays for it. The booking check is then queued behind any
    /// create already in flight, so a booking cannot slip in before the delete.
    /// On refusal the room gets its previous status back.
    #[instrument(skip(self, bookings))]
    pub async fn delete_room(&self, id: RoomId, bookings: &BookingClient) -> Result<(), RoomError> {
        let room = self
            .get(id)
            .await?
            .ok_or_else(|| RoomError::NotFound(id.to_string()))?;
        let reopen = room.status == RoomStatus::Available;
        if reopen {
            self.set_status(id, RoomStatus::Maintenance).await?;
        }

        let booked = bookings
            .has_bookings(id)
            .await
            .map_err(|e| RoomError::ActorCommunicationError(e.to_string()));
        match booked {
            Ok(false) => {}
            Ok(true) => {
                warn!(room = %id, "Refusing to delete a room with bookings");
                if reopen {
                    self.set_status(id, room.status).await?;
                }
                return Err(RoomError::HasBookings(id));
            }
            Err(e) => {
                if reopen {
                    self.set_status(id, room.status).await?;
                }
                return Err(e);
            }
        }

        self.delete(id).await?;
        info!(room = %id, "Room deleted");
        Ok(())
    }

    /// Rooms with status `available` and no confirmed booking overlapping
    /// `[start, end)`, ordered by room number.
    #[instrument(skip(self, bookings))]
    pub async fn list_available(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        bookings: &BookingClient,
    ) -> Result<Vec<Room>, RoomError> {
        if start >= end {
            return Err(RoomError::ValidationError(
                "end date must be after start date".into(),
            ));
        }

        let blocking = bookings
            .overlapping(start, end)
            .await
            .map_err(|e| RoomError::ActorCommunicationError(e.to_string()))?;
        let rooms = self.list_rooms().await?;

        Ok(rooms
            .into_iter()
            .filter(|room| room.status == RoomStatus::Available)
            .filter(|room| availability::is_available(&blocking, room.id, start, end))
            .collect())
    }
}

#[async_trait]
impl ActorClient<Room> for RoomClient {
    type Error = RoomError;

    fn inner(&self) -> &ResourceClient<Room> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(e, RoomError::NotFound, RoomError::ActorCommunicationError)
    }
}

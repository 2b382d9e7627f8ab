//! [`ActorEntity`] implementation for [`FoodOrder`].

use super::actions::FoodOrderAction;
use super::catalog::MenuCatalog;
use super::error::FoodOrderError;
use crate::clients::{MenuClient, RoomClient};
use crate::clock::SharedClock;
use crate::model::{FoodOrder, FoodOrderCreate, FoodOrderId, FoodOrderStatus, StatusMachine};
use crate::ordering::{draft_lines, price_lines};
use async_trait::async_trait;
use chrono::DateTime;
use resource_actor::{ActorClient, ActorEntity};
use rust_decimal::Decimal;

#[async_trait]
impl ActorEntity for FoodOrder {
    type Id = FoodOrderId;
    type Create = FoodOrderCreate;
    type Update = ();
    type Action = FoodOrderAction;
    type ActionResult = FoodOrder;
    type Context = (MenuClient, RoomClient, SharedClock);
    type Error = FoodOrderError;

    fn from_create_params(id: FoodOrderId, params: FoodOrderCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            user_id: params.user_id,
            room_id: params.room_id,
            status: FoodOrderStatus::Pending,
            lines: draft_lines(params.lines)?,
            total_price: Decimal::ZERO,
            notes: params.notes,
            created_at: DateTime::UNIX_EPOCH,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (menu, rooms, clock) = ctx;

        if let Some(room_id) = self.room_id {
            rooms
                .get(room_id)
                .await
                .map_err(|e| FoodOrderError::ActorCommunicationError(e.to_string()))?
                .ok_or(FoodOrderError::RoomNotFound(room_id))?;
        }

        self.total_price = price_lines(&MenuCatalog(menu), &mut self.lines).await?;
        self.created_at = clock.now();
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: FoodOrderAction,
        _ctx: &Self::Context,
    ) -> Result<FoodOrder, Self::Error> {
        match action {
            FoodOrderAction::Advance(to) => {
                self.status = self.status.transition(to)?;
            }
        }
        Ok(self.clone())
    }
}

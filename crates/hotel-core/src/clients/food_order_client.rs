//! # Food Order Client

use super::recover_error;
use crate::food_order_actor::{FoodOrderAction, FoodOrderError};
use crate::model::{FoodOrder, FoodOrderCreate, FoodOrderId, FoodOrderStatus, UserId};
use async_trait::async_trait;
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct FoodOrderClient {
    inner: ResourceClient<FoodOrder>,
}

impl FoodOrderClient {
    pub fn new(inner: ResourceClient<FoodOrder>) -> Self {
        Self { inner }
    }

    /// Places an order. Lines are priced against the menu inside the food-order
    /// actor; if any line fails, no order exists afterwards.
    #[instrument(skip(self))]
    pub async fn create_food_order(
        &self,
        params: FoodOrderCreate,
    ) -> Result<FoodOrderId, FoodOrderError> {
        debug!("Sending create to food order actor");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order = %id, "Food order placed");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn advance(
        &self,
        id: FoodOrderId,
        to: FoodOrderStatus,
    ) -> Result<FoodOrder, FoodOrderError> {
        self.inner
            .perform_action(id, FoodOrderAction::Advance(to))
            .await
            .map_err(Self::map_error)
    }

    pub async fn start_preparing(&self, id: FoodOrderId) -> Result<FoodOrder, FoodOrderError> {
        self.advance(id, FoodOrderStatus::Preparing).await
    }

    pub async fn deliver(&self, id: FoodOrderId) -> Result<FoodOrder, FoodOrderError> {
        self.advance(id, FoodOrderStatus::Delivered).await
    }

    pub async fn cancel(&self, id: FoodOrderId) -> Result<FoodOrder, FoodOrderError> {
        self.advance(id, FoodOrderStatus::Cancelled).await
    }

    pub async fn list_by_user(&self, user: UserId) -> Result<Vec<FoodOrder>, FoodOrderError> {
        self.list(Filter::new(move |o: &FoodOrder| o.user_id == user))
            .await
    }

    pub async fn list_by_status(
        &self,
        status: FoodOrderStatus,
    ) -> Result<Vec<FoodOrder>, FoodOrderError> {
        self.list(Filter::new(move |o: &FoodOrder| o.status == status))
            .await
    }

    pub async fn list_orders(&self) -> Result<Vec<FoodOrder>, FoodOrderError> {
        self.list(Filter::all()).await
    }
}

#[async_trait]
impl ActorClient<FoodOrder> for FoodOrderClient {
    type Error = FoodOrderError;

    fn inner(&self) -> &ResourceClient<FoodOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(
            e,
            FoodOrderError::NotFound,
            FoodOrderError::ActorCommunicationError,
        )
    }
}

//! # Purchase Order Client

use super::recover_error;
use crate::model::{PurchaseOrder, PurchaseOrderCreate, PurchaseOrderId, PurchaseOrderStatus, UserId};
use crate::purchase_order_actor::{PurchaseOrderAction, PurchaseOrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct PurchaseOrderClient {
    inner: ResourceClient<PurchaseOrder>,
}

impl PurchaseOrderClient {
    pub fn new(inner: ResourceClient<PurchaseOrder>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_purchase_order(
        &self,
        params: PurchaseOrderCreate,
    ) -> Result<PurchaseOrderId, PurchaseOrderError> {
        debug!("Sending create to purchase order actor");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(po = %id, "Purchase order placed");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn transition(
        &self,
        id: PurchaseOrderId,
        to: PurchaseOrderStatus,
        actor: UserId,
    ) -> Result<PurchaseOrder, PurchaseOrderError> {
        self.inner
            .perform_action(id, PurchaseOrderAction::Transition { to, actor })
            .await
            .map_err(Self::map_error)
    }

    pub async fn approve(
        &self,
        id: PurchaseOrderId,
        actor: UserId,
    ) -> Result<PurchaseOrder, PurchaseOrderError> {
        self.transition(id, PurchaseOrderStatus::Approved, actor).await
    }

    /// Marks the order received and credits its lines to inventory, exactly once.
    pub async fn receive(
        &self,
        id: PurchaseOrderId,
        actor: UserId,
    ) -> Result<PurchaseOrder, PurchaseOrderError> {
        self.transition(id, PurchaseOrderStatus::Received, actor).await
    }

    pub async fn cancel(
        &self,
        id: PurchaseOrderId,
        actor: UserId,
    ) -> Result<PurchaseOrder, PurchaseOrderError> {
        self.transition(id, PurchaseOrderStatus::Cancelled, actor).await
    }

    pub async fn list_by_status(
        &self,
        status: PurchaseOrderStatus,
    ) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        self.list(Filter::new(move |po: &PurchaseOrder| po.status == status))
            .await
    }

    pub async fn list_purchase_orders(&self) -> Result<Vec<PurchaseOrder>, PurchaseOrderError> {
        self.list(Filter::all()).await
    }
}

#[async_trait]
impl ActorClient<PurchaseOrder> for PurchaseOrderClient {
    type Error = PurchaseOrderError;

    fn inner(&self) -> &ResourceClient<PurchaseOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(
            e,
            PurchaseOrderError::NotFound,
            PurchaseOrderError::ActorCommunicationError,
        )
    }
}

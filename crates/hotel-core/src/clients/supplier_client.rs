//! # Supplier Client

use super::recover_error;
use crate::model::{Supplier, SupplierCreate, SupplierId, SupplierUpdate};
use crate::supplier_actor::SupplierError;
use async_trait::async_trait;
use resource_actor::{ActorClient, Filter, FrameworkError, ResourceClient};
use tracing::instrument;

#[derive(Clone)]
pub struct SupplierClient {
    inner: ResourceClient<Supplier>,
}

impl SupplierClient {
    pub fn new(inner: ResourceClient<Supplier>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_supplier(&self, params: SupplierCreate) -> Result<SupplierId, SupplierError> {
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_supplier(
        &self,
        id: SupplierId,
        update: SupplierUpdate,
    ) -> Result<Supplier, SupplierError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    pub async fn list_suppliers(&self) -> Result<Vec<Supplier>, SupplierError> {
        self.list(Filter::all()).await
    }

    pub async fn list_active(&self) -> Result<Vec<Supplier>, SupplierError> {
        self.list(Filter::new(|s: &Supplier| s.is_active)).await
    }
}

#[async_trait]
impl ActorClient<Supplier> for SupplierClient {
    type Error = SupplierError;

    fn inner(&self) -> &ResourceClient<Supplier> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        recover_error(
            e,
            SupplierError::NotFound,
            SupplierError::ActorCommunicationError,
        )
    }
}

//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`,
//! `list` and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, Filter, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Guest { id: u32, vip: bool }
/// #[derive(Debug)] struct GuestCreate;
/// #[derive(Debug)] struct GuestUpdate;
/// #[derive(Debug)] enum GuestAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct GuestError(String);
///
/// impl From<String> for GuestError {
///     fn from(s: String) -> Self { GuestError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Guest {
///     type Id = u32;
///     type Create = GuestCreate;
///     type Update = GuestUpdate;
///     type Action = GuestAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = GuestError;
///
///     fn from_create_params(id: u32, _: GuestCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, vip: false })
///     }
///     async fn on_update(&mut self, _: GuestUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: GuestAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct GuestClient {
///     inner: ResourceClient<Guest>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Guest> for GuestClient {
///     type Error = GuestError;
///
///     fn inner(&self) -> &ResourceClient<Guest> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         GuestError(e.to_string())
///     }
/// }
///
/// async fn usage(client: GuestClient) {
///     // get(), list() and delete() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list(Filter::new(|g: &Guest| g.vip)).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity the filter accepts, in ID order.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: Filter<T>) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}

//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Filter, ResourceRequest};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop, so the
/// `store` needs no `Mutex` or `RwLock`. Every request, including the async hooks it
/// awaits, finishes before the next one is read. That makes one message the unit of
/// atomicity for a resource type: a check followed by a write inside a hook cannot
/// be interleaved with another request.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Desk { id: u32 }
/// #[derive(Debug)] struct DeskCreate;
/// #[derive(Debug)] struct DeskUpdate;
/// #[derive(Debug)] enum DeskAction {}
/// #[derive(Debug, thiserror::Error)] #[error("desk error")] struct DeskError;
///
/// #[async_trait]
/// impl ActorEntity for Desk {
///     type Id = u32;
///     type Create = DeskCreate;
///     type Update = DeskUpdate;
///     type Action = DeskAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = DeskError;
///
///     fn from_create_params(id: u32, _: DeskCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: DeskUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: DeskAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Desk>::new(10);
///     tokio::spawn(actor.run(()));
///     let _ = client.create(DeskCreate).await;
/// }
/// ```
///
/// # Operations
///
/// * **Create**: builds the entity, runs `on_create`, then `check_constraints` against
///   every stored entity. The ID counter only advances when the entity is inserted.
/// * **Get** / **List**: clones out of the store, `List` in ID order.
/// * **Update** / **Action**: run the hook on a clone and write it back on success.
/// * **Delete**: `on_delete` may veto the removal.
/// * **Transaction**: a batch of actions over possibly different IDs, committed together.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // "Booking" instead of "hotel_core::model::booking::Booking"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items = self.list(&filter);
                    debug!(entity_type, matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Transaction { ops, respond_to } => {
                    let count = ops.len();
                    debug!(entity_type, count, ?ops, "Transaction");
                    let result = self.transaction(ops, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, count, "Transaction committed"),
                        Err(e) => warn!(entity_type, count, error = %e, "Transaction rolled back"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn others(&self, skip: Option<&T::Id>) -> Vec<&T> {
        self.store
            .iter()
            .filter(|(id, _)| Some(*id) != skip)
            .map(|(_, item)| item)
            .collect()
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;
        item.check_constraints(&self.others(None))
            .map_err(entity_error)?;

        self.next_id += 1;
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    fn list(&self, filter: &Filter<T>) -> Vec<T> {
        self.store
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut staged = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        staged
            .on_update(update, context)
            .await
            .map_err(entity_error)?;
        staged
            .check_constraints(&self.others(Some(id)))
            .map_err(entity_error)?;

        self.store.insert(id.clone(), staged.clone());
        Ok(staged)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context).await.map_err(entity_error)?;
        self.store.remove(id);
        Ok(())
    }

    async fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let mut staged = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        let result = staged
            .handle_action(action, context)
            .await
            .map_err(entity_error)?;

        self.store.insert(id.clone(), staged);
        Ok(result)
    }

    /// Applies every action to a staged copy and commits only if all of them succeed.
    /// Several actions on the same ID see each other's effects.
    async fn transaction(
        &mut self,
        ops: Vec<(T::Id, T::Action)>,
        context: &T::Context,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut staged: BTreeMap<T::Id, T> = BTreeMap::new();
        let mut results = Vec::with_capacity(ops.len());

        for (id, action) in ops {
            let item = match staged.entry(id) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => match self.store.get(entry.key()) {
                    Some(current) => entry.insert(current.clone()),
                    None => return Err(FrameworkError::NotFound(entry.key().to_string())),
                },
            };
            let result = item
                .handle_action(action, context)
                .await
                .map_err(entity_error)?;
            results.push(result);
        }

        self.store.extend(staged);
        Ok(results)
    }
}

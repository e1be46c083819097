//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::{Repository, StagedWrite};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one persisted collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor processes its messages *sequentially*,
/// so every read-modify-write of the collection is one critical section and readers
/// never observe a half-applied change. No `Mutex` is needed around `store`.
///
/// # Usage Pattern
///
/// 1.  **Open**: Call `ResourceActor::open()` to load the collection and get the `actor`
///     (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// # Implementation Details
///
/// The actor keeps the collection in a `Vec` in stored order, so listing and iteration are
/// deterministic, together with `next_sequence`, one past the highest sequence number ever
/// observed. Deletions never lower `next_sequence`.
///
/// Every mutating operation works on a copy of the collection:
///
/// * **Create**: assign id → reject duplicates → `from_create_params` → `on_create` →
///   save snapshot → swap in.
/// * **Update**: clone entity → `on_update` → save snapshot → swap in.
/// * **Delete**: `on_delete` → save snapshot without the entity → swap in.
/// * **Action**: clone entity → `handle_action` → `commit_action` → swap in.
/// * **Transact**: run every action against one snapshot → commit the snapshot and the
///   companion writes in a single backend commit → swap in.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_sequence: u32,
    repository: Repository<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` over an already loaded collection.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `repository` - Where snapshots are written after each mutation.
    /// * `items` - The initial collection, in stored order.
    pub fn new(
        buffer_size: usize,
        repository: Repository<T>,
        items: Vec<T>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let next_sequence = items
            .iter()
            .filter_map(|item| T::sequence_of(item.id()))
            .max()
            .map_or(1, |highest| highest.saturating_add(1));
        let actor = Self {
            receiver,
            store: items,
            next_sequence,
            repository,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Loads the collection through `repository` and creates the actor over it.
    pub async fn open(
        buffer_size: usize,
        repository: Repository<T>,
    ) -> Result<(Self, ResourceClient<T>), FrameworkError> {
        let items = repository.load_all().await?;
        Ok(Self::new(buffer_size, repository, items))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.store[index].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
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
                    let result = self.act(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Transact {
                    actions,
                    companions,
                    respond_to,
                } => {
                    debug!(entity_type, ?actions, companions = companions.len(), "Transact");
                    let count = actions.len();
                    let result = self.transact(actions, companions, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, actions = count, "Transaction committed"),
                        Err(e) => warn!(entity_type, error = %e, "Transaction rejected"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    fn not_found(id: &T::Id) -> FrameworkError {
        FrameworkError::NotFound(id.to_string())
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let id = T::assign_id(self.next_sequence, &params);
        if self.position(&id).is_some() {
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        let mut item = T::from_create_params(id, params).map_err(FrameworkError::entity)?;
        item.on_create(context).await.map_err(FrameworkError::entity)?;

        let mut snapshot = self.store.clone();
        snapshot.push(item.clone());
        self.repository.save_all(&snapshot).await?;

        if let Some(sequence) = T::sequence_of(item.id()) {
            self.next_sequence = self.next_sequence.max(sequence.saturating_add(1));
        }
        self.store = snapshot;
        Ok(item)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        let mut item = self.store[index].clone();
        item.on_update(update, context)
            .await
            .map_err(FrameworkError::entity)?;

        let mut snapshot = self.store.clone();
        snapshot[index] = item.clone();
        self.repository.save_all(&snapshot).await?;

        self.store = snapshot;
        Ok(item)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        self.store[index]
            .on_delete(context)
            .await
            .map_err(FrameworkError::entity)?;

        let mut snapshot = self.store.clone();
        snapshot.remove(index);
        self.repository.save_all(&snapshot).await?;

        self.store = snapshot;
        Ok(())
    }

    async fn act(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        let mut item = self.store[index].clone();
        let result = item
            .handle_action(action, context)
            .await
            .map_err(FrameworkError::entity)?;

        let mut snapshot = self.store.clone();
        snapshot[index] = item;
        T::commit_action(&result, &snapshot, context, &self.repository)
            .await
            .map_err(FrameworkError::entity)?;

        self.store = snapshot;
        Ok(result)
    }

    async fn transact(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        companions: Vec<StagedWrite>,
        context: &T::Context,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut snapshot = self.store.clone();
        let mut results = Vec::with_capacity(actions.len());
        for (id, action) in actions {
            let item = snapshot
                .iter_mut()
                .find(|item| item.id() == &id)
                .ok_or_else(|| Self::not_found(&id))?;
            let result = item
                .handle_action(action, context)
                .await
                .map_err(FrameworkError::entity)?;
            results.push(result);
        }

        let mut writes = Vec::with_capacity(companions.len() + 1);
        writes.push(self.repository.stage(&snapshot)?);
        writes.extend(companions);
        self.repository.commit(writes).await?;

        self.store = snapshot;
        Ok(results)
    }
}

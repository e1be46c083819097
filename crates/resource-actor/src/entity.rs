//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (menu item, inventory
//! item, order, …) must implement to be managed by the generic `ResourceActor`. It specifies
//! associated types for IDs, DTOs, actions, context, and errors, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`, `commit_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::sequence_of`]
//! - [`ActorEntity::commit_action`]
//!
//! You do **not** need to implement these unless you want to customize behavior.
//!
//! # Hooks run on a copy
//! The actor hands every hook a clone of the stored entity and only replaces the stored
//! collection after the new snapshot has been written through the repository. A hook that
//! fails, or a write that fails, leaves the actor's state untouched.

use crate::error::StoreError;
use crate::store::Repository;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Deduct`, `Close`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity. One enum per actor, the union of everything its hooks
    /// can fail with. Storage failures raised inside [`ActorEntity::commit_action`] convert
    /// into it.
    type Error: std::error::Error + From<StoreError> + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;

    /// Chooses the identifier for a new entity.
    ///
    /// `sequence` is one past the highest sequence number the actor has ever seen for this
    /// store. Entities with caller-chosen ids ignore it and read the id from `params`.
    fn assign_id(sequence: u32, params: &Self::Create) -> Self::Id;

    /// The sequence number embedded in an id, for ids the actor generates itself.
    fn sequence_of(_id: &Self::Id) -> Option<u32> {
        None
    }

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`; validation belongs here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Persists `snapshot`, the collection as it will look once the action is applied.
    ///
    /// The default writes the snapshot through the actor's own repository. Entities whose
    /// actions must land together with another store stage the snapshot and pass it on.
    async fn commit_action(
        _result: &Self::ActionResult,
        snapshot: &[Self],
        _ctx: &Self::Context,
        repository: &Repository<Self>,
    ) -> Result<(), Self::Error> {
        repository.save_all(snapshot).await?;
        Ok(())
    }
}

//! # Inventory Actor
//!
//! The ingredient ledger. Besides plain CRUD it exposes the check-and-deduct protocol used
//! when an order closes: every deduction of one demand map is validated against a copy of the
//! ledger, and the ledger is only replaced once the new snapshot (together with the closed
//! orders snapshot) has been committed.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`InventoryItem`]
//! - [`error`] - [`InventoryError`]
//! - [`actions`] - [`InventoryAction`] and [`InventoryActionResult`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::model::InventoryItem;
use crate::storage::INVENTORY_KEY;
use resource_actor::{Backend, FrameworkError, Repository, ResourceActor};
use std::sync::Arc;

/// Loads the inventory from `backend` and creates the Inventory actor and its client.
pub async fn open(
    backend: Arc<dyn Backend>,
    buffer_size: usize,
) -> Result<(ResourceActor<InventoryItem>, InventoryClient), FrameworkError> {
    let (actor, client) =
        ResourceActor::open(buffer_size, Repository::new(backend, INVENTORY_KEY)).await?;
    Ok((actor, InventoryClient::new(client)))
}

//! # Menu Actor
//!
//! Owns the menu collection. The rest of the system reads it as a [`MenuCatalog`] snapshot:
//! the order actor resolves recipes through it when closing an order, and the report engine
//! resolves prices and names.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`]
//! - [`catalog`] - [`MenuCatalog`] lookups and demand aggregation
//! - [`open()`] - Loads the menu and creates the actor and its client

pub mod catalog;
pub mod entity;
pub mod error;

pub use catalog::*;
pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use crate::storage::MENU_KEY;
use resource_actor::{Backend, FrameworkError, Repository, ResourceActor};
use std::sync::Arc;

/// Loads the menu from `backend` and creates the Menu actor and its client.
pub async fn open(
    backend: Arc<dyn Backend>,
    buffer_size: usize,
) -> Result<(ResourceActor<MenuItem>, MenuClient), FrameworkError> {
    let (actor, client) = ResourceActor::open(buffer_size, Repository::new(backend, MENU_KEY)).await?;
    Ok((actor, MenuClient::new(client)))
}

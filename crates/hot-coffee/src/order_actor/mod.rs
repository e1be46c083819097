//! # Order Actor
//!
//! Owns the order collection and its state machine (`open` → `closed`, one way). Ids are
//! `order<N>`, with `N` one past the highest number ever seen, so deleting an order never
//! frees its number for reuse.
//!
//! The Order actor depends on the Menu and Inventory actors through [`OrderContext`],
//! injected at `run()` time. Requests only ever flow orders → inventory, never back.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{InventoryClient, MenuClient, OrderClient};
use crate::model::Order;
use crate::storage::ORDERS_KEY;
use resource_actor::{Backend, FrameworkError, Repository, ResourceActor};
use std::sync::Arc;

/// Dependencies of the Order actor.
#[derive(Clone)]
pub struct OrderContext {
    pub menu: MenuClient,
    pub inventory: InventoryClient,
}

impl OrderContext {
    pub fn new(menu: MenuClient, inventory: InventoryClient) -> Self {
        Self { menu, inventory }
    }
}

/// Loads the orders from `backend` and creates the Order actor and its client.
pub async fn open(
    backend: Arc<dyn Backend>,
    buffer_size: usize,
) -> Result<(ResourceActor<Order>, OrderClient), FrameworkError> {
    let (actor, client) =
        ResourceActor::open(buffer_size, Repository::new(backend, ORDERS_KEY)).await?;
    Ok((actor, OrderClient::new(client)))
}

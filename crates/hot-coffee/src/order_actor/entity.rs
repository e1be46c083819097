//! ActorEntity trait implementation for the Order domain type.
//!
//! # Closing an order
//!
//! `Close` runs as an action on the order actor, so no other order request is processed
//! until it finishes:
//!
//! 1. A closed order is rejected with [`OrderError::AlreadyClosed`].
//! 2. Every line is resolved against a [`MenuCatalog`](crate::menu_actor::MenuCatalog)
//!    snapshot and summed into one [`Demand`](crate::model::Demand) map.
//! 3. The order is marked closed on the actor's working copy.
//! 4. [`commit_action`](ActorEntity::commit_action) stages the orders snapshot and hands it
//!    to the inventory actor, which validates every deduction and commits both files at once.
//!
//! Nothing becomes visible, in memory or on disk, unless step 4 succeeds.

use super::actions::{OrderAction, OrderActionResult};
use super::{OrderContext, OrderError};
use crate::model::{now, Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use async_trait::async_trait;
use resource_actor::{ActorEntity, Repository};
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn assign_id(sequence: u32, _params: &OrderCreate) -> OrderId {
        OrderId(sequence)
    }

    fn sequence_of(id: &OrderId) -> Option<u32> {
        Some(id.0)
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        params.validate()?;
        Ok(Self {
            id,
            customer_name: params.customer_name,
            items: params.items,
            status: OrderStatus::Open,
            created_at: params.created_at.unwrap_or_else(now),
            closed_at: None,
        })
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), OrderError> {
        if self.is_closed() {
            return Err(OrderError::Closed(self.id.to_string()));
        }
        update.validate()?;
        self.customer_name = update.customer_name;
        self.items = update.items;
        if let Some(created_at) = update.created_at {
            self.created_at = created_at;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &OrderContext) -> Result<(), OrderError> {
        if self.is_closed() {
            return Err(OrderError::Closed(self.id.to_string()));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Close => {
                if self.is_closed() {
                    return Err(OrderError::AlreadyClosed(self.id.to_string()));
                }
                let catalog = ctx.menu.catalog().await?;
                let demand = catalog
                    .demand_for(&self.items)
                    .map_err(OrderError::ProductNotInMenu)?;
                debug!(order_id = %self.id, ?demand, "Demand computed");

                self.status = OrderStatus::Closed;
                self.closed_at = Some(now());
                Ok(OrderActionResult::Closed {
                    order: self.clone(),
                    demand,
                })
            }
        }
    }

    /// Commits the closed orders snapshot together with the inventory deduction.
    async fn commit_action(
        result: &OrderActionResult,
        snapshot: &[Self],
        ctx: &OrderContext,
        repository: &Repository<Self>,
    ) -> Result<(), OrderError> {
        match result {
            OrderActionResult::Closed { demand, .. } => {
                let staged = repository.stage(snapshot)?;
                ctx.inventory.check_and_deduct(demand, vec![staged]).await?;
                Ok(())
            }
        }
    }
}

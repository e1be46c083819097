//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! Orchestration (menu lookup, inventory deduction) happens inside the Order actor's
//! `Close` action, so callers only see one request per operation.
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!(?update, "update_order called");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Closes an open order, deducting its ingredients from inventory in the same commit.
    #[instrument(skip(self))]
    pub async fn close_order(&self, id: OrderId) -> Result<Order, OrderError> {
        info!("Sending close to actor");
        match self
            .inner
            .perform_action(id, OrderAction::Close)
            .await
            .map_err(Self::map_error)?
        {
            OrderActionResult::Closed { order, .. } => Ok(order),
        }
    }

    /// Every closed order, in stored order.
    #[instrument(skip(self))]
    pub async fn closed_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list().await?;
        orders.retain(Order::is_closed);
        Ok(orders)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::Storage(e) => OrderError::from(e),
            other => other
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

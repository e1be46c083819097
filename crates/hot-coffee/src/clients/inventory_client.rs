//! # Inventory Client
//!
//! Provides a high‑level API for interacting with the `InventoryItem` actor, including the
//! check-and-deduct protocol used while closing orders.
use crate::inventory_actor::{InventoryAction, InventoryError};
use crate::model::{Demand, InventoryItem, InventoryItemUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient, StagedWrite};
use tracing::{debug, instrument};

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, item), fields(ingredient_id = %item.ingredient_id))]
    pub async fn add_item(&self, item: InventoryItem) -> Result<InventoryItem, InventoryError> {
        debug!("Sending request");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_item(
        &self,
        id: String,
        update: InventoryItemUpdate,
    ) -> Result<InventoryItem, InventoryError> {
        debug!(?update, "Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Validates every entry of `demand` against current stock and, only if all of them are
    /// covered, deducts them and commits the new inventory together with `companions`.
    ///
    /// An unknown ingredient fails with [`InventoryError::NotFound`], a shortfall with
    /// [`InventoryError::InsufficientStock`]. Either way nothing is deducted and no companion
    /// write is published.
    #[instrument(skip(self, demand, companions), fields(ingredients = demand.len()))]
    pub async fn check_and_deduct(
        &self,
        demand: &Demand,
        companions: Vec<StagedWrite>,
    ) -> Result<(), InventoryError> {
        debug!(?demand, "Sending request");
        let actions = demand
            .iter()
            .map(|(id, quantity)| (id.clone(), InventoryAction::Deduct(*quantity)))
            .collect();
        self.inner
            .transact(actions, companions)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            FrameworkError::AlreadyExists(id) => InventoryError::AlreadyExists(id),
            FrameworkError::Storage(e) => InventoryError::from(e),
            other => other
                .downcast_entity::<InventoryError>()
                .unwrap_or_else(|e| InventoryError::ActorCommunicationError(e.to_string())),
        }
    }
}

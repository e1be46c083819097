//! # Menu Client
//!
//! Provides a high‑level API for interacting with the `MenuItem` actor.
use crate::menu_actor::{MenuCatalog, MenuError};
use crate::model::{MenuItem, MenuItemUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, item), fields(product_id = %item.id))]
    pub async fn add_item(&self, item: MenuItem) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.create(item).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_item(&self, id: String, update: MenuItemUpdate) -> Result<MenuItem, MenuError> {
        debug!(?update, "Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Snapshot of the whole menu for lookups.
    #[instrument(skip(self))]
    pub async fn catalog(&self) -> Result<MenuCatalog, MenuError> {
        debug!("Sending request");
        self.inner
            .list()
            .await
            .map(MenuCatalog::new)
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::AlreadyExists(id) => MenuError::AlreadyExists(id),
            FrameworkError::Storage(e) => MenuError::from(e),
            other => other
                .downcast_entity::<MenuError>()
                .unwrap_or_else(|e| MenuError::ActorCommunicationError(e.to_string())),
        }
    }
}

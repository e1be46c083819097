use crate::api::AppState;
use crate::clients::{InventoryClient, MenuClient, OrderClient};
use crate::config::DEFAULT_BUFFER;
use crate::order_actor::OrderContext;
use crate::reports::ReportEngine;
use crate::{inventory_actor, menu_actor, order_actor};
use resource_actor::{Backend, FrameworkError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to start actors: {0}")]
    Startup(#[from] FrameworkError),

    #[error("Actor task failed: {0}")]
    ActorFailed(String),
}

/// Startup options for [`CoffeeShop::start`].
#[derive(Debug, Clone)]
pub struct ShopOptions {
    /// Mailbox capacity of each actor.
    pub buffer: usize,
    /// Seed for the item-of-the-day generator; entropy when `None`.
    pub seed: Option<u64>,
    /// Whether report summaries are written to `aggregation.json`.
    pub export_reports: bool,
}

impl Default for ShopOptions {
    fn default() -> Self {
        Self {
            buffer: DEFAULT_BUFFER,
            seed: None,
            export_reports: true,
        }
    }
}

/// The runtime orchestrator: loads every store, wires the actors together and shuts them
/// down again.
///
/// # Architecture
///
/// - **Menu actor** and **Inventory actor** have no dependencies (`Context = ()`).
/// - **Order actor** receives an [`OrderContext`] holding the Menu and Inventory clients.
/// - **Report engine** reads through the Order and Menu clients.
///
/// # Example
///
/// ```ignore
/// let shop = CoffeeShop::start(backend, ShopOptions::default()).await?;
/// let order = shop.order_client.create_order(params).await?;
/// shop.order_client.close_order(order.id).await?;
/// shop.shutdown().await?;
/// ```
pub struct CoffeeShop {
    pub menu_client: MenuClient,
    pub inventory_client: InventoryClient,
    pub order_client: OrderClient,
    pub reports: Arc<ReportEngine>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CoffeeShop {
    /// Loads every collection from `backend` and spawns the actors.
    ///
    /// Nothing is spawned unless all three stores load, so a malformed file fails startup
    /// without leaving tasks behind.
    pub async fn start(backend: Arc<dyn Backend>, options: ShopOptions) -> Result<Self, SystemError> {
        // 1. Load stores and create actors
        let (menu_actor, menu_client) = menu_actor::open(backend.clone(), options.buffer).await?;
        let (inventory_actor, inventory_client) =
            inventory_actor::open(backend.clone(), options.buffer).await?;
        let (order_actor, order_client) = order_actor::open(backend.clone(), options.buffer).await?;

        // 2. Start actors with injected context
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let inventory_handle = tokio::spawn(inventory_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext::new(
            menu_client.clone(),
            inventory_client.clone(),
        )));

        let reports = match options.seed {
            Some(seed) => ReportEngine::with_seed(order_client.clone(), menu_client.clone(), seed),
            None => ReportEngine::from_entropy(order_client.clone(), menu_client.clone()),
        };
        let reports = if options.export_reports {
            reports.with_export(backend)
        } else {
            reports
        };

        info!(buffer = options.buffer, seeded = options.seed.is_some(), "Coffee shop started");
        Ok(Self {
            menu_client,
            inventory_client,
            order_client,
            reports: Arc::new(reports),
            handles: vec![order_handle, inventory_handle, menu_handle],
        })
    }

    /// Clients bundle for the HTTP layer.
    pub fn state(&self) -> AppState {
        AppState {
            menu: self.menu_client.clone(),
            inventory: self.inventory_client.clone(),
            orders: self.order_client.clone(),
            reports: self.reports.clone(),
        }
    }

    /// Drops every client and waits for the actors to drain their mailboxes.
    ///
    /// Every [`AppState`] handed out must be dropped first (the server must have stopped),
    /// otherwise the actors keep running. The Order actor stops first; its context holds the
    /// last Menu and Inventory clients, so those two follow.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down coffee shop...");
        drop(self.reports);
        drop(self.order_client);
        drop(self.inventory_client);
        drop(self.menu_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(SystemError::ActorFailed(e.to_string()));
            }
        }

        info!("Coffee shop shutdown complete.");
        Ok(())
    }
}

//! # Report Engine
//!
//! Computes revenue, the most popular item and the item of the day from snapshots fetched
//! through the order and menu clients. It never mutates either store.
//!
//! - Lines naming a product that is no longer on the menu are skipped with a warning.
//! - The popular item counts order lines, not quantities. On a tie the product that reached
//!   the winning count first, walking closed orders in stored order, wins.
//! - The item of the day comes from an injected random source, so a seeded engine picks the
//!   same sequence of items every run.

use super::ReportError;
use crate::clients::{MenuClient, OrderClient};
use crate::menu_actor::MenuCatalog;
use crate::model::{AggregationSnapshot, MenuItem, Order};
use crate::storage::AGGREGATION_KEY;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use resource_actor::{Backend, StagedWrite, StoreError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info, instrument, warn};

pub struct ReportEngine {
    orders: OrderClient,
    menu: MenuClient,
    rng: Mutex<Box<dyn RngCore + Send>>,
    export: Option<Arc<dyn Backend>>,
}

impl ReportEngine {
    pub fn new(orders: OrderClient, menu: MenuClient, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            orders,
            menu,
            rng: Mutex::new(Box::new(rng)),
            export: None,
        }
    }

    pub fn with_seed(orders: OrderClient, menu: MenuClient, seed: u64) -> Self {
        Self::new(orders, menu, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(orders: OrderClient, menu: MenuClient) -> Self {
        Self::new(orders, menu, StdRng::from_entropy())
    }

    /// Writes every [`summary`](Self::summary) to `aggregation.json` on `backend`.
    pub fn with_export(mut self, backend: Arc<dyn Backend>) -> Self {
        self.export = Some(backend);
        self
    }

    #[instrument(skip(self))]
    pub async fn total_sales(&self) -> Result<Decimal, ReportError> {
        let (orders, catalog) = self.load().await?;
        Ok(total_sales(&orders, &catalog))
    }

    /// `None` when no closed order names a product that is still on the menu.
    #[instrument(skip(self))]
    pub async fn popular_item(&self) -> Result<Option<MenuItem>, ReportError> {
        let (orders, catalog) = self.load().await?;
        Ok(popular_item(&orders, &catalog))
    }

    #[instrument(skip(self))]
    pub async fn daily_item(&self) -> Result<MenuItem, ReportError> {
        let catalog = self.menu.catalog().await?;
        self.pick(&catalog)
    }

    /// Computes every aggregate from one pair of snapshots and exports the result.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<AggregationSnapshot, ReportError> {
        let (orders, catalog) = self.load().await?;
        let snapshot = AggregationSnapshot {
            total_sales: total_sales(&orders, &catalog),
            popular_item: popular_item(&orders, &catalog),
            daily_item: self.pick(&catalog)?,
        };

        if let Some(backend) = &self.export {
            let bytes = serde_json::to_vec_pretty(&snapshot)
                .map_err(|e| StoreError::codec(AGGREGATION_KEY, e))?;
            backend
                .commit(vec![StagedWrite::new(AGGREGATION_KEY, bytes)])
                .await?;
            info!(file = AGGREGATION_KEY, "Exported aggregation snapshot");
        }
        Ok(snapshot)
    }

    async fn load(&self) -> Result<(Vec<Order>, MenuCatalog), ReportError> {
        let orders = self.orders.closed_orders().await?;
        let catalog = self.menu.catalog().await?;
        debug!(closed_orders = orders.len(), menu_items = catalog.len(), "Loaded report inputs");
        Ok((orders, catalog))
    }

    fn pick(&self, catalog: &MenuCatalog) -> Result<MenuItem, ReportError> {
        if catalog.is_empty() {
            return Err(ReportError::EmptyMenu);
        }
        let index = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..catalog.len());
        Ok(catalog.items()[index].clone())
    }
}

fn total_sales(orders: &[Order], catalog: &MenuCatalog) -> Decimal {
    let mut total = Decimal::ZERO;
    for order in orders {
        for line in &order.items {
            match catalog.get(&line.product_id) {
                Some(item) => total += item.price * Decimal::from(line.quantity),
                None => warn!(order_id = %order.id, product_id = %line.product_id, "Skipping product missing from menu"),
            }
        }
    }
    total
}

fn popular_item(orders: &[Order], catalog: &MenuCatalog) -> Option<MenuItem> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<(&MenuItem, usize)> = None;
    for order in orders {
        for line in &order.items {
            let Some(item) = catalog.get(&line.product_id) else {
                warn!(order_id = %order.id, product_id = %line.product_id, "Skipping product missing from menu");
                continue;
            };
            let count = counts.entry(item.id.as_str()).or_insert(0);
            *count += 1;
            if best.map_or(true, |(_, top)| *count > top) {
                best = Some((item, *count));
            }
        }
    }
    best.map(|(item, _)| item.clone())
}

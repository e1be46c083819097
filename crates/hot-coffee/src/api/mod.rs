//! HTTP surface.
//!
//! | Route | Methods |
//! |---|---|
//! | `/order` | `GET`, `POST` |
//! | `/order/{id}` | `GET`, `PUT`, `DELETE` |
//! | `/order/{id}/close` | `POST` |
//! | `/menu`, `/inventory` | `GET`, `POST` |
//! | `/menu/{id}`, `/inventory/{id}` | `GET`, `PUT`, `DELETE` |
//! | `/reports/total-sales`, `/reports/popular-items`, `/reports/daily-item`, `/reports/summary` | `GET` |

pub mod error;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reports;

pub use error::ApiError;

use crate::clients::{InventoryClient, MenuClient, OrderClient};
use crate::reports::ReportEngine;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state: one client per actor plus the report engine.
#[derive(Clone)]
pub struct AppState {
    pub menu: MenuClient,
    pub inventory: InventoryClient,
    pub orders: OrderClient,
    pub reports: Arc<ReportEngine>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/order", orders::router())
        .nest("/menu", menu::router())
        .nest("/inventory", inventory::router())
        .nest("/reports", reports::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! Persistence wiring: file names under the data directory, the flat-file backend and the
//! default catalog written on first start.

pub mod file_backend;
pub mod seed;

pub use file_backend::FileBackend;
pub use seed::*;

pub const MENU_KEY: &str = "menu_item.json";
pub const INVENTORY_KEY: &str = "inventory.json";
pub const ORDERS_KEY: &str = "order.json";
pub const AGGREGATION_KEY: &str = "aggregation.json";
pub const LOG_FILE: &str = "app.log";

//! # Hot Coffee
//!
//! Order fulfilment and inventory engine for a coffee shop, served over HTTP and persisted as
//! flat JSON files.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Menu items, inventory items, orders and report types, with their payload validation.
//!
//! ### 2. The Actors ([`menu_actor`], [`inventory_actor`], [`order_actor`])
//! One [`ResourceActor`](resource_actor::ResourceActor) per store. Each processes its
//! mailbox sequentially, so every read-modify-write of a store is one critical section.
//! Closing an order is an action on the Order actor that hands the staged orders snapshot to
//! the Inventory actor, which deducts the aggregated demand and commits both files together.
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers that turn framework errors back into each actor's error enum.
//!
//! ### 4. Reports ([`reports`])
//! Revenue, most popular item and a seedable item of the day.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`CoffeeShop`](lifecycle::CoffeeShop) wires the actors together and shuts them down;
//! [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ### 6. The Edges ([`api`], [`storage`], [`config`])
//! The axum router, the journaled file backend with its seed data, and the CLI.

pub mod api;
pub mod clients;
pub mod config;
pub mod inventory_actor;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod reports;
pub mod storage;

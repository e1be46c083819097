//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the actors, plus observability setup.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created first and receive their dependencies in `run(context)`. Only the
//! Order actor has dependencies:
//!
//! ```rust,ignore
//! impl ActorEntity for Order {
//!     type Context = OrderContext; // MenuClient + InventoryClient
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the server** - the router and its [`AppState`](crate::api::AppState) are dropped
//! 2. **Drop all clients** - closes the sender side of channels
//! 3. **Actors detect closure** - `receiver.recv()` returns `None` once the mailbox is drained
//! 4. **Await completion** - [`CoffeeShop::shutdown`] waits for every actor task
//!
//! The dependency graph is acyclic (orders → menu, orders → inventory), so channel closure is
//! enough to stop everything.

pub mod coffee_shop;
pub mod tracing;

pub use coffee_shop::*;
pub use self::tracing::*;

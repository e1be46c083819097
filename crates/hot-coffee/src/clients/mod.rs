//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each client maps [`FrameworkError`](resource_actor::FrameworkError) back onto its actor's
//! error enum: runtime variants become the matching domain variant and boxed entity errors are
//! downcast to the type the entity raised.

pub mod inventory_client;
pub mod menu_client;
pub mod order_client;

pub use inventory_client::*;
pub use menu_client::*;
pub use order_client::*;

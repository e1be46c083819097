//! Read-only aggregates over closed orders and the menu.

pub mod engine;
pub mod error;

pub use engine::*;
pub use error::*;

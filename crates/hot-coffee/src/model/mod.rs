//! Pure data structures (DTOs) implementing the [`ActorEntity`](resource_actor::ActorEntity) trait,
//! plus the field validation they share.

pub mod demand;
pub mod inventory;
pub mod menu;
pub mod order;
pub mod report;

pub use demand::*;
pub use inventory::*;
pub use menu::*;
pub use order::*;
pub use report::*;

use rust_decimal::Decimal;

/// A payload field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::new(field, "must be a positive number"));
    }
    Ok(())
}

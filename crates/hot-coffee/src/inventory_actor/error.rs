//! Error types for the Inventory actor.

use crate::model::ValidationError;
use resource_actor::StoreError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during inventory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The requested ingredient was not found.
    #[error("Ingredient not found: {0}")]
    NotFound(String),

    /// An ingredient with this id already exists.
    #[error("Ingredient already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid inventory item: {0}")]
    Validation(#[from] ValidationError),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock for {ingredient_id}: required {required}, available {available}")]
    InsufficientStock {
        ingredient_id: String,
        required: Decimal,
        available: Decimal,
    },

    /// Reading or writing the inventory file failed.
    #[error("Inventory storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for InventoryError {
    fn from(e: StoreError) -> Self {
        InventoryError::Storage(e.to_string())
    }
}

//! Error types for the Order actor.

use crate::inventory_actor::InventoryError;
use crate::menu_actor::MenuError;
use crate::model::ValidationError;
use resource_actor::StoreError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The order is closed and can no longer be changed or removed.
    #[error("Order {0} is closed and cannot be modified")]
    Closed(String),

    #[error("Order {0} is already closed")]
    AlreadyClosed(String),

    /// A line of the order names a product that is not on the menu.
    #[error("Product not in menu: {0}")]
    ProductNotInMenu(String),

    /// A recipe names an ingredient the inventory does not track.
    #[error("Ingredient not found in inventory: {0}")]
    IngredientNotFound(String),

    /// There is insufficient stock to fulfill the order.
    #[error("Insufficient stock for {ingredient_id}: required {required}, available {available}")]
    InsufficientStock {
        ingredient_id: String,
        required: Decimal,
        available: Decimal,
    },

    /// Reading or writing a data file failed.
    #[error("Order storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for OrderError {
    fn from(e: StoreError) -> Self {
        OrderError::Storage(e.to_string())
    }
}

impl From<InventoryError> for OrderError {
    fn from(e: InventoryError) -> Self {
        match e {
            InventoryError::NotFound(id) => OrderError::IngredientNotFound(id),
            InventoryError::InsufficientStock {
                ingredient_id,
                required,
                available,
            } => OrderError::InsufficientStock {
                ingredient_id,
                required,
                available,
            },
            InventoryError::Validation(v) => OrderError::Validation(v),
            InventoryError::Storage(msg) => OrderError::Storage(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<MenuError> for OrderError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::Storage(msg) => OrderError::Storage(msg),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

//! Error types for the Menu actor.

use crate::model::ValidationError;
use resource_actor::StoreError;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A menu item with this id already exists.
    #[error("Menu item already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid menu item: {0}")]
    Validation(#[from] ValidationError),

    /// Reading or writing the menu file failed.
    #[error("Menu storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<StoreError> for MenuError {
    fn from(e: StoreError) -> Self {
        MenuError::Storage(e.to_string())
    }
}

//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor runtime and the
//! store layer. Entity errors travel boxed inside [`FrameworkError::Entity`] so that typed
//! clients can recover their own error enum with [`FrameworkError::downcast_entity`].

/// Errors raised by a storage backend or by the collection codec.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O failure on {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed data in {key}: {message}")]
    Codec { key: String, message: String },
}

impl StoreError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    pub fn codec(key: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::Codec {
            key: key.into(),
            message: error.to_string(),
        }
    }
}

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("Entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    pub fn entity<E: std::error::Error + Send + Sync + 'static>(error: E) -> Self {
        Self::Entity(Box::new(error))
    }

    /// Recovers the entity's own error type, handing the original error back on mismatch.
    pub fn downcast_entity<E: std::error::Error + 'static>(self) -> Result<E, Self> {
        match self {
            Self::Entity(inner) => inner.downcast::<E>().map(|e| *e).map_err(Self::Entity),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("out of beans")]
    struct BeanError;

    #[test]
    fn downcast_recovers_entity_error() {
        let error = FrameworkError::entity(BeanError);
        assert_eq!(error.downcast_entity::<BeanError>().unwrap(), BeanError);
    }

    #[test]
    fn downcast_leaves_other_variants_alone() {
        let error = FrameworkError::NotFound("order7".to_string());
        match error.downcast_entity::<BeanError>() {
            Err(FrameworkError::NotFound(id)) => assert_eq!(id, "order7"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

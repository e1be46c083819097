use super::backend::{Backend, StagedWrite};
use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;

/// Whole-collection JSON codec bound to one key of a [`Backend`].
///
/// Collections are stored as a single JSON array. A key that has never been written, or
/// holds only whitespace, loads as an empty collection.
pub struct Repository<T> {
    backend: Arc<dyn Backend>,
    key: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Repository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository").field("key", &self.key).finish()
    }
}

impl<T: Serialize + DeserializeOwned> Repository<T> {
    pub fn new(backend: Arc<dyn Backend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn load_all(&self) -> Result<Vec<T>, StoreError> {
        match self.backend.read(&self.key).await? {
            None => Ok(Vec::new()),
            Some(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Some(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| StoreError::codec(&self.key, e))
            }
        }
    }

    /// Serializes `items` without publishing them.
    pub fn stage(&self, items: &[T]) -> Result<StagedWrite, StoreError> {
        let bytes = serde_json::to_vec_pretty(items).map_err(|e| StoreError::codec(&self.key, e))?;
        Ok(StagedWrite::new(self.key.clone(), bytes))
    }

    /// Publishes several staged images, possibly belonging to other repositories, as one unit.
    pub async fn commit(&self, writes: Vec<StagedWrite>) -> Result<(), StoreError> {
        self.backend.commit(writes).await
    }

    pub async fn save_all(&self, items: &[T]) -> Result<(), StoreError> {
        let write = self.stage(items)?;
        self.backend.commit(vec![write]).await
    }
}

use crate::error::StoreError;
use async_trait::async_trait;

/// A fully serialized collection image waiting to be committed under `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedWrite {
    pub key: String,
    pub bytes: Vec<u8>,
}

impl StagedWrite {
    pub fn new(key: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            bytes,
        }
    }
}

/// Byte-level storage shared by every repository of one process.
///
/// `commit` must be all-or-nothing across the writes it receives: after it returns, either
/// every key holds its new image or (on error) every key still holds its old one once the
/// backend has recovered.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Reads the current image stored under `key`. A key that was never written is `None`.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Publishes every staged write as one unit.
    async fn commit(&self, writes: Vec<StagedWrite>) -> Result<(), StoreError>;
}

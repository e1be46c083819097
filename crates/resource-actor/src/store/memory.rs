use super::backend::{Backend, StagedWrite};
use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory [`Backend`] for tests and ephemeral runs.
///
/// Commits are applied under one lock, so a multi-key commit is observed entirely or not at
/// all. [`MemoryBackend::fail_next_commits`] injects storage failures without touching disk.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, Vec<u8>>>,
    failures: AtomicUsize,
    commits: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `key` with a raw image, bypassing the commit path.
    pub fn insert(&self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), bytes.into());
        }
    }

    /// Returns the raw image currently stored under `key`.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    /// Makes the next `count` commits fail with an I/O error.
    pub fn fail_next_commits(&self, count: usize) {
        self.failures.store(count, Ordering::SeqCst);
    }

    /// Number of commits that went through.
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::io(key, std::io::Error::other("memory backend poisoned")))?;
        Ok(entries.get(key).cloned())
    }

    async fn commit(&self, writes: Vec<StagedWrite>) -> Result<(), StoreError> {
        let keys = writes
            .iter()
            .map(|w| w.key.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let injected = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if injected {
            return Err(StoreError::io(
                keys,
                std::io::Error::other("injected commit failure"),
            ));
        }

        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::io(&keys, std::io::Error::other("memory backend poisoned")))?;
        for write in writes {
            entries.insert(write.key, write.bytes);
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn multi_key_commit_lands_together() {
        let backend = MemoryBackend::new();
        backend
            .commit(vec![
                StagedWrite::new("a.json", b"[1]".to_vec()),
                StagedWrite::new("b.json", b"[2]".to_vec()),
            ])
            .await
            .unwrap();

        assert_eq!(backend.get("a.json").unwrap(), b"[1]");
        assert_eq!(backend.get("b.json").unwrap(), b"[2]");
        assert_eq!(backend.commit_count(), 1);
    }

    #[tokio::test]
    async fn injected_failure_leaves_entries_untouched() {
        let backend = MemoryBackend::new();
        backend.insert("a.json", "[]");
        backend.fail_next_commits(1);

        let result = backend
            .commit(vec![StagedWrite::new("a.json", b"[1]".to_vec())])
            .await;
        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert_eq!(backend.get("a.json").unwrap(), b"[]");

        // Only one failure was armed.
        backend
            .commit(vec![StagedWrite::new("a.json", b"[1]".to_vec())])
            .await
            .unwrap();
        assert_eq!(backend.get("a.json").unwrap(), b"[1]");
    }
}

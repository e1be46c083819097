//! Flat-file [`Backend`] rooted at the data directory.
//!
//! Every key is a file name directly under the root. A single write goes to `<file>.tmp` and
//! is renamed over the target. A multi-file commit writes every tmp file first, then publishes
//! `commit.journal` listing the keys; once the journal exists the commit is decided and the
//! tmp files are renamed into place. A rename that fails after that point leaves the journal
//! behind: the commit still reports success and the next commit (or [`FileBackend::open`])
//! rolls the journal forward before doing anything else. Tmp files that no journal claims are
//! discarded on open.
//!
//! Commits are serialized by a lock shared between clones, since the tmp name of a key is
//! fixed.

use async_trait::async_trait;
use resource_actor::{Backend, StagedWrite, StoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

const JOURNAL: &str = "commit.journal";
const TMP_SUFFIX: &str = ".tmp";

#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
    commit_lock: Arc<Mutex<()>>,
}

impl FileBackend {
    /// Creates the root directory if needed and recovers from an interrupted commit.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| StoreError::io(root.display().to_string(), e))?;
        let backend = Self {
            root,
            commit_lock: Arc::new(Mutex::new(())),
        };
        backend.recover().await?;
        info!(root = %backend.root.display(), "File backend ready");
        Ok(backend)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}{TMP_SUFFIX}"))
    }

    async fn recover(&self) -> Result<(), StoreError> {
        let _guard = self.commit_lock.lock().await;
        self.roll_forward().await?;

        let root = self.root.display().to_string();
        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| StoreError::io(&root, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::io(&root, e))?
        {
            if entry.file_name().to_string_lossy().ends_with(TMP_SUFFIX) {
                debug!(file = %entry.path().display(), "Removing stray tmp file");
                fs::remove_file(entry.path())
                    .await
                    .map_err(|e| StoreError::io(&root, e))?;
            }
        }
        Ok(())
    }

    /// Finishes a decided commit whose journal is still present. Must run under the commit lock.
    async fn roll_forward(&self) -> Result<(), StoreError> {
        let bytes = match fs::read(self.path(JOURNAL)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(StoreError::io(JOURNAL, e)),
        };
        let keys: Vec<String> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::codec(JOURNAL, e))?;
        for key in &keys {
            let pending = fs::try_exists(self.tmp_path(key))
                .await
                .map_err(|e| StoreError::io(key, e))?;
            if pending {
                self.publish(key).await?;
            }
        }
        fs::remove_file(self.path(JOURNAL))
            .await
            .map_err(|e| StoreError::io(JOURNAL, e))?;
        self.sync_root().await?;
        warn!(files = keys.len(), "Rolled interrupted commit forward");
        Ok(())
    }

    async fn write_tmp(&self, key: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let tmp = self.tmp_path(key);
        let mut file = fs::File::create(&tmp)
            .await
            .map_err(|e| StoreError::io(key, e))?;
        file.write_all(bytes)
            .await
            .map_err(|e| StoreError::io(key, e))?;
        file.sync_all().await.map_err(|e| StoreError::io(key, e))?;
        Ok(tmp)
    }

    async fn publish(&self, key: &str) -> Result<(), StoreError> {
        fs::rename(self.tmp_path(key), self.path(key))
            .await
            .map_err(|e| StoreError::io(key, e))
    }

    /// Flushes the directory entries so completed renames survive a power loss.
    #[cfg(unix)]
    async fn sync_root(&self) -> Result<(), StoreError> {
        let root = self.root.display().to_string();
        let dir = fs::File::open(&self.root)
            .await
            .map_err(|e| StoreError::io(&root, e))?;
        dir.sync_all().await.map_err(|e| StoreError::io(&root, e))
    }

    #[cfg(not(unix))]
    async fn sync_root(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn discard(&self, keys: &[&str]) {
        for key in keys {
            let _ = fs::remove_file(self.tmp_path(key)).await;
        }
    }

    async fn commit_one(&self, write: &StagedWrite) -> Result<(), StoreError> {
        let key = write.key.as_str();
        let published = match self.write_tmp(key, &write.bytes).await {
            Ok(_) => self.publish(key).await,
            Err(e) => Err(e),
        };
        if let Err(e) = published {
            self.discard(&[key]).await;
            return Err(e);
        }
        if let Err(e) = self.sync_root().await {
            warn!(key, error = %e, "Published file but could not sync the data directory");
        }
        Ok(())
    }

    async fn commit_many(&self, writes: &[StagedWrite]) -> Result<(), StoreError> {
        let keys: Vec<&str> = writes.iter().map(|w| w.key.as_str()).collect();
        for write in writes {
            if let Err(e) = self.write_tmp(&write.key, &write.bytes).await {
                self.discard(&keys).await;
                return Err(e);
            }
        }

        let journal = serde_json::to_vec(&keys).map_err(|e| StoreError::codec(JOURNAL, e))?;
        let journaled = match self.write_tmp(JOURNAL, &journal).await {
            Ok(_) => self.publish(JOURNAL).await,
            Err(e) => Err(e),
        };
        if let Err(e) = journaled {
            self.discard(&keys).await;
            self.discard(&[JOURNAL]).await;
            return Err(e);
        }
        if let Err(e) = self.sync_root().await {
            warn!(error = %e, "Could not sync the data directory after publishing the journal");
        }

        // Decided: the journal carries any rename that fails from here on.
        for key in &keys {
            if let Err(e) = self.publish(key).await {
                warn!(key, error = %e, "Commit decided but not fully published; journal kept");
                return Ok(());
            }
        }
        if let Err(e) = fs::remove_file(self.path(JOURNAL)).await {
            warn!(error = %e, "Could not remove the commit journal");
            return Ok(());
        }
        if let Err(e) = self.sync_root().await {
            warn!(error = %e, "Could not sync the data directory after publishing");
        }
        Ok(())
    }
}

fn check_key(key: &str) -> Result<(), StoreError> {
    let plain = !key.is_empty()
        && key != JOURNAL
        && !key.ends_with(TMP_SUFFIX)
        && Path::new(key).file_name().is_some_and(|name| name == key);
    if plain {
        Ok(())
    } else {
        Err(StoreError::io(
            key,
            std::io::Error::new(ErrorKind::InvalidInput, "key must be a plain file name"),
        ))
    }
}

#[async_trait]
impl Backend for FileBackend {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        check_key(key)?;
        match fs::read(self.path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    async fn commit(&self, writes: Vec<StagedWrite>) -> Result<(), StoreError> {
        for write in &writes {
            check_key(&write.key)?;
        }
        if writes.is_empty() {
            return Ok(());
        }
        let _guard = self.commit_lock.lock().await;
        // A journal left by an earlier commit is finished before anything new is written.
        self.roll_forward().await?;
        match writes.as_slice() {
            [single] => self.commit_one(single).await,
            many => self.commit_many(many).await,
        }
    }
}

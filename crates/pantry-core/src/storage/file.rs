//! File-backed key-value storage
//!
//! Each key maps to one file inside the data directory (`recipes`,
//! `premium_status`, `onboarding_complete`). Writes go through a temp
//! file, fsync, then rename, so a key's file is never left half-written.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use super::error::{StorageError, StorageResult};
use super::kv::KeyValueStore;
use crate::config::Config;

/// Production storage backend: one file per key under a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is not created until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store rooted at the configured data directory
    pub fn open(config: &Config) -> Self {
        Self::new(&config.data_dir)
    }

    /// The directory this store writes into
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key: key.to_string(),
                source: e,
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::CreateDirectory {
                path: self.root.clone(),
                source: e,
            })?;

        let target = self.key_path(key);
        atomic_write(&target, value.as_bytes())
            .await
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                source: e,
            })
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Remove {
                key: key.to_string(),
                source: e,
            }),
        }
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
async fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path).await?;
    file.write_all(data).await?;
    file.sync_all().await?;

    fs::rename(&temp_path, path).await
}

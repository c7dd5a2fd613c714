//! Blob store interface and implementations
//!
//! The pipeline treats storage as a narrow key/value contract: download
//! text (absent keys yield an empty string, not an error) and upload
//! text. `FsStore` backs the contract with a directory tree;
//! `RetryingStore` layers the fixed-delay retry policy over any store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::retry::RetryPolicy;

/// Minimal key/value text storage contract
pub trait ObjectStore {
    /// Fetch the text stored under `key`; an absent key yields `Ok("")`
    fn download_text(&self, key: &str) -> Result<String>;

    /// Store `contents` under `key`, replacing any existing object
    fn upload_text(&self, contents: &str, key: &str) -> Result<()>;
}

/// Directory-backed object store
///
/// Keys map to paths relative to the root directory. Parent directories
/// are created on upload as needed.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Whether an object exists under `key`
    pub fn exists(&self, key: &str) -> bool {
        self.object_path(key).is_file()
    }

    /// Remove the object under `key`
    pub fn delete(&self, key: &str) -> Result<()> {
        let path = self.object_path(key);
        fs::remove_file(&path).with_context(|| format!("failed to delete {}", path.display()))
    }
}

impl ObjectStore for FsStore {
    fn download_text(&self, key: &str) -> Result<String> {
        let path = self.object_path(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            // A missing object is expected, not a fault.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(key, "object not found, returning empty text");
                Ok(String::new())
            }
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }

    fn upload_text(&self, contents: &str, key: &str) -> Result<()> {
        let path = self.object_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))
    }
}

/// Store decorator that retries each operation per a `RetryPolicy`
pub struct RetryingStore<S> {
    inner: S,
    policy: RetryPolicy,
}

impl<S: ObjectStore> RetryingStore<S> {
    pub fn new(inner: S, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl<S: ObjectStore> ObjectStore for RetryingStore<S> {
    fn download_text(&self, key: &str) -> Result<String> {
        self.policy.run(|| self.inner.download_text(key))
    }

    fn upload_text(&self, contents: &str, key: &str) -> Result<()> {
        self.policy.run(|| self.inner.upload_text(contents, key))
    }
}

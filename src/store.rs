//! File-backed phone collection store
//!
//! The whole collection lives in one JSON array file. Every mutating
//! operation performs a full read-modify-write cycle against that file; a
//! writer lock makes those cycles mutually exclusive within the process so
//! two concurrent mutations cannot lose each other's writes.
//!
//! The store never creates the collection file: it must exist before the
//! service starts, and a missing file is a hard error.

use crate::phone::Phone;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::debug;

/// Error types for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection file does not exist
    #[error("Phones file not found: {0}")]
    Missing(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed phone collection.
///
/// Constructed once with the collection file path and shared across handlers
/// as router state. Tests point it at a private temp file.
#[derive(Debug)]
pub struct PhoneStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl PhoneStore {
    /// Create a store for the collection file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    /// Path of the collection file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole collection. Caller must hold the lock.
    async fn read_collection(&self) -> Result<Vec<Phone>, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::Missing(self.path.display().to_string()));
        }
        let json = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Serialize and write the whole collection. Caller must hold the lock.
    async fn write_collection(&self, phones: &[Phone]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(phones)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }

    /// Return the full collection in stored order.
    pub async fn list(&self) -> Result<Vec<Phone>, StoreError> {
        let _guard = self.lock.read().await;
        self.read_collection().await
    }

    /// Append a record to the collection and return it.
    pub async fn create(&self, phone: Phone) -> Result<Phone, StoreError> {
        let _guard = self.lock.write().await;
        let mut phones = self.read_collection().await?;
        phones.push(phone.clone());
        self.write_collection(&phones).await?;
        debug!("Appended phone record ({} total)", phones.len());
        Ok(phone)
    }

    /// Shallow-merge `patch` into the first record whose `id` matches.
    ///
    /// Returns the merged record, or `None` (file untouched) when no record
    /// matches.
    pub async fn update(&self, id: &str, patch: Phone) -> Result<Option<Phone>, StoreError> {
        let _guard = self.lock.write().await;
        let mut phones = self.read_collection().await?;

        let Some(existing) = phones.iter_mut().find(|p| p.matches(id)) else {
            return Ok(None);
        };
        existing.merge(patch);
        let merged = existing.clone();

        self.write_collection(&phones).await?;
        Ok(Some(merged))
    }

    /// Remove every record whose `id` matches.
    ///
    /// Update touches only the first match while delete removes all of them;
    /// that asymmetry is inherited behavior, kept deliberately (see
    /// DESIGN.md). Returns `false` (file untouched) when nothing matched.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.lock.write().await;
        let mut phones = self.read_collection().await?;

        let before = phones.len();
        phones.retain(|p| !p.matches(id));
        if phones.len() == before {
            return Ok(false);
        }

        self.write_collection(&phones).await?;
        debug!("Removed {} phone record(s)", before - phones.len());
        Ok(true)
    }

    /// Overwrite the collection file with `bytes`, unvalidated, then re-read
    /// and parse it.
    ///
    /// The bytes hit disk before any parsing, so a `Json` error from this
    /// method means the file has already been replaced with invalid content.
    /// There is no rollback.
    pub async fn replace(&self, bytes: &[u8]) -> Result<Vec<Phone>, StoreError> {
        let _guard = self.lock.write().await;
        fs::write(&self.path, bytes).await?;
        self.read_collection().await
    }
}

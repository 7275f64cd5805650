//! JSON file history store.
//!
//! The whole history lives in one JSON array, newest entry first, in the same
//! camelCase layout the storyboard records serialize to.

use super::{DEFAULT_HISTORY_CAPACITY, prepend_bounded};
use std::path::{Path, PathBuf};
use storyboard_core::Scene;
use storyboard_error::{JsonError, StorageError, StorageErrorKind, StoryboardResult};
use storyboard_interface::{HistoryEntry, HistoryStore};
use tokio::sync::Mutex;

/// History persisted to a JSON file.
///
/// - **Forgiving reads**: a missing, unreadable or corrupt file loads as an
///   empty history
/// - **Atomic writes**: temp file + rename
/// - **Serialized updates**: pushes and clears hold a lock across
///   read-modify-write
#[derive(Debug)]
pub struct FileSystemHistoryStore {
    path: PathBuf,
    capacity: usize,
    write_lock: Mutex<()>,
}

impl FileSystemHistoryStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// Creates the parent directory if it doesn't exist. The file itself is
    /// created on first write.
    ///
    /// # Errors
    ///
    /// Returns error if the parent directory cannot be created.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>, capacity: usize) -> StoryboardResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        tracing::info!(path = %path.display(), capacity, "Opened history file");
        Ok(Self {
            path,
            capacity,
            write_lock: Mutex::new(()),
        })
    }

    /// Creates a store with the default capacity.
    ///
    /// # Errors
    ///
    /// Returns error if the parent directory cannot be created.
    pub fn with_default_capacity(path: impl AsRef<Path>) -> StoryboardResult<Self> {
        Self::new(path, DEFAULT_HISTORY_CAPACITY)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Vec<HistoryEntry> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Unreadable history, starting empty");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt history, starting empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, entries: &[HistoryEntry]) -> StoryboardResult<()> {
        let data = serde_json::to_vec_pretty(entries).map_err(|e| {
            StorageError::new(StorageErrorKind::Encode(JsonError::from(e).message))
        })?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl HistoryStore for FileSystemHistoryStore {
    #[tracing::instrument(skip(self, source_script, scenes), fields(path = %self.path.display(), scene_count = scenes.len()))]
    async fn push(&self, source_script: &str, scenes: &[Scene]) -> StoryboardResult<HistoryEntry> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.load().await;
        let entry = prepend_bounded(&mut entries, source_script, scenes, self.capacity);
        self.save(&entries).await?;

        tracing::info!(id = %entry.id(), retained = entries.len(), "Stored storyboard in history");
        Ok(entry)
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn list(&self) -> StoryboardResult<Vec<HistoryEntry>> {
        let entries = self.load().await;
        tracing::debug!(count = entries.len(), "Loaded history");
        Ok(entries)
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn clear(&self) -> StoryboardResult<()> {
        let _guard = self.write_lock.lock().await;
        self.save(&[]).await?;
        tracing::info!("Cleared history");
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

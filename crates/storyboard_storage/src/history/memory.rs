//! In-memory history store.

use super::{DEFAULT_HISTORY_CAPACITY, prepend_bounded};
use storyboard_core::Scene;
use storyboard_error::StoryboardResult;
use storyboard_interface::{HistoryEntry, HistoryStore};
use tokio::sync::RwLock;

/// History kept for the lifetime of the process.
#[derive(Debug)]
pub struct InMemoryHistoryStore {
    entries: RwLock<Vec<HistoryEntry>>,
    capacity: usize,
}

impl InMemoryHistoryStore {
    /// Creates an empty store retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            capacity,
        }
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[async_trait::async_trait]
impl HistoryStore for InMemoryHistoryStore {
    #[tracing::instrument(skip(self, source_script, scenes), fields(scene_count = scenes.len()))]
    async fn push(&self, source_script: &str, scenes: &[Scene]) -> StoryboardResult<HistoryEntry> {
        let mut entries = self.entries.write().await;
        let entry = prepend_bounded(&mut entries, source_script, scenes, self.capacity);
        tracing::debug!(id = %entry.id(), retained = entries.len(), "Stored storyboard in memory");
        Ok(entry)
    }

    async fn list(&self) -> StoryboardResult<Vec<HistoryEntry>> {
        Ok(self.entries.read().await.clone())
    }

    async fn clear(&self) -> StoryboardResult<()> {
        self.entries.write().await.clear();
        tracing::debug!("Cleared in-memory history");
        Ok(())
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

//! Collaborator traits.

use crate::{AnalyticsRecord, AnalyticsSummary, HistoryEntry, UserIdentity};
use async_trait::async_trait;
use storyboard_core::Scene;
use storyboard_error::StoryboardResult;

/// Append-only, bounded list of generated storyboards.
///
/// Implementations keep entries newest first and retain only their configured
/// capacity after each push. Unreadable persisted state must load as an empty
/// history rather than fail.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Records a storyboard and returns the stored entry.
    async fn push(&self, source_script: &str, scenes: &[Scene]) -> StoryboardResult<HistoryEntry>;

    /// All retained entries, newest first.
    async fn list(&self) -> StoryboardResult<Vec<HistoryEntry>>;

    /// Looks up one entry by id.
    async fn get(&self, id: &str) -> StoryboardResult<Option<HistoryEntry>> {
        Ok(self.list().await?.into_iter().find(|entry| entry.id() == id))
    }

    /// Removes every entry.
    async fn clear(&self) -> StoryboardResult<()>;

    /// Maximum number of entries retained.
    fn capacity(&self) -> usize;
}

/// Fire-and-forget sink for generation analytics.
#[async_trait]
pub trait AnalyticsRecorder: Send + Sync {
    /// Records a generation for `identity`.
    ///
    /// Returns `Ok(None)` without recording anything when no identity is
    /// present.
    async fn record(
        &self,
        identity: Option<&UserIdentity>,
        prompt: &str,
        scenes_count: usize,
    ) -> StoryboardResult<Option<AnalyticsRecord>>;

    /// A user's records, newest first.
    async fn list(&self, user_id: &str) -> StoryboardResult<Vec<AnalyticsRecord>>;

    /// Totals over a user's records.
    async fn summary(&self, user_id: &str) -> StoryboardResult<AnalyticsSummary> {
        let records = self.list(user_id).await?;
        Ok(AnalyticsSummary::from_records(&records))
    }
}

/// Supplies the currently authenticated user, if any.
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, or `None`.
    fn current(&self) -> Option<UserIdentity>;
}

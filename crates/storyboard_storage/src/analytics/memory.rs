//! In-memory analytics recorder.

use super::{build_record, newest_for_user};
use storyboard_error::StoryboardResult;
use storyboard_interface::{AnalyticsRecord, AnalyticsRecorder, UserIdentity};
use tokio::sync::RwLock;

/// Analytics kept for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryAnalyticsRecorder {
    records: RwLock<Vec<AnalyticsRecord>>,
}

impl InMemoryAnalyticsRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AnalyticsRecorder for InMemoryAnalyticsRecorder {
    async fn record(
        &self,
        identity: Option<&UserIdentity>,
        prompt: &str,
        scenes_count: usize,
    ) -> StoryboardResult<Option<AnalyticsRecord>> {
        let Some(identity) = identity else {
            tracing::debug!("No identity, skipping analytics");
            return Ok(None);
        };

        let record = build_record(identity, prompt, scenes_count)?;
        self.records.write().await.push(record.clone());
        Ok(Some(record))
    }

    async fn list(&self, user_id: &str) -> StoryboardResult<Vec<AnalyticsRecord>> {
        let records = self.records.read().await.clone();
        Ok(newest_for_user(records, user_id))
    }
}

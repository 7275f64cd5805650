//! Append-only JSON Lines analytics recorder.

use super::{build_record, newest_for_user};
use std::path::{Path, PathBuf};
use storyboard_error::{
    AnalyticsError, AnalyticsErrorKind, JsonError, StorageError, StorageErrorKind,
    StoryboardResult,
};
use storyboard_interface::{AnalyticsRecord, AnalyticsRecorder, UserIdentity};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Analytics appended one JSON object per line.
///
/// Lines that fail to parse are skipped on read.
#[derive(Debug)]
pub struct JsonLinesAnalyticsRecorder {
    path: PathBuf,
    append_lock: Mutex<()>,
}

impl JsonLinesAnalyticsRecorder {
    /// Creates a recorder appending to the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the parent directory cannot be created.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> StoryboardResult<Self> {
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

        Ok(Self {
            path,
            append_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl AnalyticsRecorder for JsonLinesAnalyticsRecorder {
    #[tracing::instrument(skip(self, identity, prompt), fields(path = %self.path.display()))]
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
        let mut line = serde_json::to_string(&record).map_err(JsonError::from)?;
        line.push('\n');

        let _guard = self.append_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                AnalyticsError::new(AnalyticsErrorKind::Append(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            })?;

        file.write_all(line.as_bytes()).await.map_err(|e| {
            AnalyticsError::new(AnalyticsErrorKind::Append(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;
        file.flush().await.map_err(|e| {
            AnalyticsError::new(AnalyticsErrorKind::Append(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!(user_id = %record.user_id(), "Recorded generation");
        Ok(Some(record))
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn list(&self, user_id: &str) -> StoryboardResult<Vec<AnalyticsRecord>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(AnalyticsError::new(AnalyticsErrorKind::Read(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        let records = raw
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(number, line)| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(line = number + 1, error = %e, "Skipping malformed analytics line");
                    None
                }
            });

        Ok(newest_for_user(records, user_id))
    }
}

//! Analytics recorder backends.

mod jsonl;
mod memory;

pub use jsonl::JsonLinesAnalyticsRecorder;
pub use memory::InMemoryAnalyticsRecorder;

use storyboard_error::{AnalyticsError, AnalyticsErrorKind, StoryboardResult};
use storyboard_interface::{AnalyticsRecord, UserIdentity};

fn build_record(
    identity: &UserIdentity,
    prompt: &str,
    scenes_count: usize,
) -> StoryboardResult<AnalyticsRecord> {
    let record = AnalyticsRecord::builder()
        .user_id(identity.id().clone())
        .prompt(prompt)
        .scenes_count(scenes_count)
        .build()
        .map_err(|e| AnalyticsError::new(AnalyticsErrorKind::Append(e)))?;
    Ok(record)
}

/// Keeps `user_id`'s records, newest first.
///
/// Records arrive oldest first; ties on timestamp keep the later arrival first.
fn newest_for_user(records: impl IntoIterator<Item = AnalyticsRecord>, user_id: &str) -> Vec<AnalyticsRecord> {
    let mut records: Vec<AnalyticsRecord> = records
        .into_iter()
        .filter(|record| record.user_id() == user_id)
        .collect();
    records.reverse();
    records.sort_by(|a, b| b.generated_at().cmp(a.generated_at()));
    records
}

//! Records exchanged with the history store and analytics recorder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storyboard_core::Scene;

/// A generated storyboard kept in the history list.
///
/// Serializes in the persisted camelCase layout with `generatedAt` as epoch
/// milliseconds.
///
/// # Examples
///
/// ```
/// use storyboard_interface::HistoryEntry;
///
/// let entry = HistoryEntry::now("A lone sailor".to_string(), vec![]);
/// assert_eq!(entry.source_script(), "A lone sailor");
/// assert!(!entry.id().is_empty());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Opaque unique identifier
    id: String,
    /// When the storyboard was generated
    #[serde(with = "chrono::serde::ts_milliseconds")]
    generated_at: DateTime<Utc>,
    /// Text the storyboard was generated from
    source_script: String,
    /// Generated scenes in order
    scenes: Vec<Scene>,
}

impl HistoryEntry {
    /// Creates a new builder.
    pub fn builder() -> HistoryEntryBuilder {
        HistoryEntryBuilder::default()
    }

    /// Creates an entry stamped with a fresh id and the current time.
    pub fn now(source_script: String, scenes: Vec<Scene>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            source_script,
            scenes,
        }
    }
}

impl HistoryEntryBuilder {
    /// Build the HistoryEntry.
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing.
    pub fn build(&self) -> Result<HistoryEntry, String> {
        self.build_internal().map_err(|e| e.to_string())
    }
}

/// An authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct UserIdentity {
    /// Stable user identifier
    id: String,
    /// Contact address, when known
    email: Option<String>,
}

impl UserIdentity {
    /// Creates an identity with no email.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }

    /// Attaches an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// One generation event as seen by analytics.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct AnalyticsRecord {
    /// Who generated the storyboard
    user_id: String,
    /// Source text of the generation
    prompt: String,
    /// Number of scenes produced
    scenes_count: usize,
    /// When the generation happened
    #[builder(default = "Utc::now()")]
    generated_at: DateTime<Utc>,
}

impl AnalyticsRecord {
    /// Creates a new builder.
    pub fn builder() -> AnalyticsRecordBuilder {
        AnalyticsRecordBuilder::default()
    }
}

impl AnalyticsRecordBuilder {
    /// Build the AnalyticsRecord.
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing.
    pub fn build(&self) -> Result<AnalyticsRecord, String> {
        self.build_internal().map_err(|e| e.to_string())
    }
}

/// Totals across a user's analytics records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Number of generations
    pub total_prompts: usize,
    /// Scenes produced across all generations
    pub total_scenes: usize,
}

impl AnalyticsSummary {
    /// Sums a set of records.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a AnalyticsRecord>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |summary, record| Self {
                total_prompts: summary.total_prompts + 1,
                total_scenes: summary.total_scenes + record.scenes_count,
            })
    }
}

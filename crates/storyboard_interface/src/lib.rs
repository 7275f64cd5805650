//! Trait definitions for the collaborators around storyboard generation.
//!
//! The transformation in `storyboard_narrative` is pure. Everything stateful
//! around it (the history list, the analytics sink, the signed-in identity) is
//! reached through the traits defined here and injected by the caller.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod records;
mod traits;

pub use records::{
    AnalyticsRecord, AnalyticsRecordBuilder, AnalyticsSummary, HistoryEntry, HistoryEntryBuilder,
    UserIdentity,
};
pub use traits::{AnalyticsRecorder, HistoryStore, IdentityProvider};

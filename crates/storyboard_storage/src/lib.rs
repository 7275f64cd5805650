//! Backends for the collaborators around storyboard generation.
//!
//! - **History**: [`InMemoryHistoryStore`] and [`FileSystemHistoryStore`], both
//!   newest first and capped at a configurable capacity (default
//!   [`DEFAULT_HISTORY_CAPACITY`]).
//! - **Analytics**: [`InMemoryAnalyticsRecorder`] and the append-only
//!   [`JsonLinesAnalyticsRecorder`]. Recording without an identity is a no-op.
//! - **Identity**: [`StaticIdentityProvider`] and [`EnvIdentityProvider`].
//!
//! # Example
//!
//! ```rust
//! use storyboard_storage::FileSystemHistoryStore;
//! use storyboard_interface::HistoryStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = FileSystemHistoryStore::new("/tmp/storyboard/history.json", 20)?;
//! let entry = store.push("Hello", &[]).await?;
//!
//! let history = store.list().await?;
//! assert_eq!(history[0].id(), entry.id());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analytics;
mod history;
mod identity;

pub use analytics::{InMemoryAnalyticsRecorder, JsonLinesAnalyticsRecorder};
pub use history::{DEFAULT_HISTORY_CAPACITY, FileSystemHistoryStore, InMemoryHistoryStore};
pub use identity::{EnvIdentityProvider, StaticIdentityProvider, USER_ENV_VAR};
pub use storyboard_error::{StorageError, StorageErrorKind};

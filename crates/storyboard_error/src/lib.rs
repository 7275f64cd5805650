//! Error types for the storyboard generator.
//!
//! The text-to-storyboard transformation itself never fails. These errors cover
//! the layers around it: configuration loading, history persistence, analytics
//! recording, and JSON (de)serialization.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{StoryboardResult, ConfigError};
//!
//! fn load_capacity() -> StoryboardResult<usize> {
//!     Err(ConfigError::new("history.capacity must be at least 1"))?
//! }
//!
//! match load_capacity() {
//!     Ok(capacity) => println!("Capacity: {}", capacity),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analytics;
mod config;
mod error;
mod json;
mod storage;

pub use analytics::{AnalyticsError, AnalyticsErrorKind};
pub use config::ConfigError;
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};

//! Storyboard - turn free-form text into a storyboard.
//!
//! A story, script or one-line idea goes in; an ordered list of scenes comes
//! out, each with a title, emotional tone, visual and lighting direction, a
//! camera suggestion, a caption and a prompt for an external image generator.
//!
//! # Quick Start
//!
//! ```rust
//! use storyboard::{generate_storyboard, export_prompts, SplitMode};
//!
//! let scenes = generate_storyboard("A knight rides to the castle", SplitMode::Sentence);
//!
//! // Short one-line prompts expand into an eight-beat arc
//! assert_eq!(scenes.len(), 8);
//! println!("{}", export_prompts(&scenes));
//! ```
//!
//! # Architecture
//!
//! - `storyboard_core` - Scene, analysis and lookup-table types
//! - `storyboard_error` - Error types
//! - `storyboard_interface` - History, analytics and identity traits
//! - `storyboard_narrative` - The text-to-storyboard transformation
//! - `storyboard_storage` - Backends for the collaborator traits
//!
//! This crate re-exports everything and adds configuration, logging
//! initialisation and a [`StoryboardSession`] tying the pieces together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod session;

pub use config::{AnalyticsConfig, GenerationConfig, HistoryConfig, LoggingConfig, StoryboardConfig};
pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
pub use session::StoryboardSession;

// Core types
pub use storyboard_core::{
    Emotion, Environment, KeyElement, ProgressLabel, Scene, SplitMode, StoryStage, StoryTemplate,
    TextAnalysis, TimeOfDay,
};

// Errors
pub use storyboard_error::{
    AnalyticsError, AnalyticsErrorKind, ConfigError, JsonError, StorageError, StorageErrorKind,
    StoryboardError, StoryboardErrorKind, StoryboardResult,
};

// Collaborator traits and records
pub use storyboard_interface::{
    AnalyticsRecord, AnalyticsRecorder, AnalyticsSummary, HistoryEntry, HistoryStore,
    IdentityProvider, UserIdentity,
};

// Transformation
pub use storyboard_narrative::{
    StoryboardGenerator, analyze, export_prompts, generate_storyboard, segment, synthesize_arc,
    synthesize_scene,
};

// Backends
pub use storyboard_storage::{
    DEFAULT_HISTORY_CAPACITY, EnvIdentityProvider, FileSystemHistoryStore,
    InMemoryAnalyticsRecorder, InMemoryHistoryStore, JsonLinesAnalyticsRecorder,
    StaticIdentityProvider, USER_ENV_VAR,
};

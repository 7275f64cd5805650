//! Core data types for the storyboard generator.
//!
//! This crate holds the values that flow through the text-to-storyboard
//! transformation ([`Scene`], [`TextAnalysis`], [`SplitMode`]) together with the
//! fixed lookup tables the heuristics consult. Table order is significant:
//! tie-breaks and "first match wins" policies iterate the `CATEGORIES` arrays
//! exactly as declared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod emotion;
mod environment;
mod key_element;
mod progress;
mod scene;
mod split_mode;
mod template;
mod time_of_day;

pub use analysis::TextAnalysis;
pub use emotion::Emotion;
pub use environment::Environment;
pub use key_element::KeyElement;
pub use progress::{ProgressLabel, StoryStage};
pub use scene::Scene;
pub use split_mode::SplitMode;
pub use template::StoryTemplate;
pub use time_of_day::TimeOfDay;

//! Text-to-storyboard transformation.
//!
//! A single synchronous pass turns free-form text into ordered [`Scene`]s:
//!
//! 1. [`analyze`] classifies the whole text by emotion, environment and time of day.
//! 2. [`segment`] cuts the text into chunks, or expands a short one-line prompt
//!    into an eight-beat arc with [`synthesize_arc`].
//! 3. [`synthesize_scene`] derives the creative metadata for each chunk.
//!
//! Every function here is pure and total: the same input always yields the same
//! storyboard, and no input (the empty string included) produces an error.
//!
//! # Example
//!
//! ```rust
//! use storyboard_narrative::generate_storyboard;
//! use storyboard_core::SplitMode;
//!
//! let scenes = generate_storyboard(
//!     "Alex wakes up. Alex finds a letter. Alex opens it.",
//!     SplitMode::Sentence,
//! );
//!
//! assert_eq!(scenes.len(), 3);
//! assert_eq!(scenes[0].title(), "1. Opening");
//! ```
//!
//! [`Scene`]: storyboard_core::Scene

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod arc;
mod export;
mod generator;
mod segmenter;
mod synthesizer;

pub use analyzer::analyze;
pub use arc::{extract_key_elements, select_template, synthesize_arc, MAX_KEY_ELEMENTS};
pub use export::export_prompts;
pub use generator::{generate_storyboard, StoryboardGenerator};
pub use segmenter::{is_single_prompt, segment, split_paragraphs, split_sentences, ARC_PROMPT_MAX_CHARS};
pub use synthesizer::{
    art_prompt, camera_direction, caption, progress_label, story_stage, synthesize_scene,
    visual_description, CAPTION_MAX_CHARS, PROMPT_EXCERPT_CHARS,
};

//! How literal input is cut into scenes.

use serde::{Deserialize, Serialize};

/// Chunking strategy for multi-part input.
///
/// # Examples
///
/// ```
/// use storyboard_core::SplitMode;
/// use std::str::FromStr;
///
/// assert_eq!(SplitMode::default(), SplitMode::Sentence);
/// assert_eq!(SplitMode::from_str("paragraph").unwrap(), SplitMode::Paragraph);
/// assert_eq!(SplitMode::Paragraph.to_string(), "paragraph");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SplitMode {
    /// One scene per sentence
    #[default]
    #[display("sentence")]
    Sentence,
    /// One scene per blank-line separated paragraph
    #[display("paragraph")]
    Paragraph,
}

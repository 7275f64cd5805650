//! Labels describing where a scene sits in the story.

use serde::{Deserialize, Serialize};

/// Title label for a scene, picked from its position in the storyboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ProgressLabel {
    /// First sixth
    #[display("Opening")]
    Opening,
    /// Second sixth
    #[display("Development")]
    Development,
    /// Third sixth
    #[display("Rising Action")]
    RisingAction,
    /// Fourth sixth
    #[display("Climax")]
    Climax,
    /// Fifth sixth
    #[display("Falling Action")]
    FallingAction,
    /// Last sixth
    #[display("Resolution")]
    Resolution,
}

impl ProgressLabel {
    /// Labels in story order.
    pub const ALL: [ProgressLabel; 6] = [
        ProgressLabel::Opening,
        ProgressLabel::Development,
        ProgressLabel::RisingAction,
        ProgressLabel::Climax,
        ProgressLabel::FallingAction,
        ProgressLabel::Resolution,
    ];
}

/// Coarse story stage used to style image prompts.
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
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum StoryStage {
    /// Early scenes
    #[default]
    #[display("beginning")]
    Beginning,
    /// Middle scenes
    #[display("rising")]
    Rising,
    /// Late scenes
    #[display("climax")]
    Climax,
    /// Closing scenes
    #[display("resolution")]
    Resolution,
}

impl StoryStage {
    /// Image style phrase for this stage.
    pub fn style(&self) -> &'static str {
        match self {
            StoryStage::Beginning => {
                "establishing shot style, clear composition, introductory lighting"
            }
            StoryStage::Rising => "dynamic composition, increasing contrast, building energy",
            StoryStage::Climax => "dramatic lighting, high contrast, intense atmosphere",
            StoryStage::Resolution => "balanced composition, warm lighting, peaceful conclusion",
        }
    }
}

//! Environment categories, keyword sets, and the phrases derived from them.

use crate::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Setting a piece of text takes place in.
///
/// # Examples
///
/// ```
/// use storyboard_core::{Environment, TimeOfDay};
///
/// assert_eq!(Environment::default().to_string(), "neutral setting");
/// assert!(Environment::Urban.visual(TimeOfDay::Night).unwrap().starts_with("neon lights"));
/// assert_eq!(Environment::Neutral.detail(), None);
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
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Rooms, houses, offices
    #[display("indoor")]
    Indoor,
    /// Parks, streets, gardens
    #[display("outdoor")]
    Outdoor,
    /// Cities, buildings, cafes
    #[display("urban")]
    Urban,
    /// Forests, rivers, oceans
    #[display("nature")]
    Nature,
    /// Nothing matched
    #[default]
    #[serde(rename = "neutral setting")]
    #[display("neutral setting")]
    Neutral,
}

impl Environment {
    /// Detection order; the first category with any keyword present wins.
    pub const CATEGORIES: [Environment; 4] = [
        Environment::Indoor,
        Environment::Outdoor,
        Environment::Urban,
        Environment::Nature,
    ];

    /// Keywords that select this environment.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Environment::Indoor => &[
                "room", "house", "office", "kitchen", "bedroom", "library", "hall",
            ],
            Environment::Outdoor => &[
                "outside", "park", "street", "garden", "forest", "mountain", "beach",
            ],
            Environment::Urban => &["city", "building", "street", "cafe", "store", "downtown"],
            Environment::Nature => &["forest", "tree", "river", "mountain", "field", "sky", "ocean"],
            Environment::Neutral => &[],
        }
    }

    /// Image-prompt detail phrase, absent for the neutral setting.
    pub fn detail(&self) -> Option<&'static str> {
        match self {
            Environment::Indoor => {
                Some("interior architecture, domestic details, confined space")
            }
            Environment::Outdoor => {
                Some("expansive landscape, natural elements, open environment")
            }
            Environment::Urban => {
                Some("modern cityscape, architectural elements, human civilization")
            }
            Environment::Nature => Some("organic textures, natural beauty, untamed wilderness"),
            Environment::Neutral => None,
        }
    }

    /// Visual phrase for this environment at the given time of day.
    ///
    /// Only the four staged times are tabulated; `TimeOfDay::Day` and the
    /// neutral setting have no entry.
    pub fn visual(&self, time: TimeOfDay) -> Option<&'static str> {
        use Environment::*;
        use TimeOfDay::*;

        let phrase = match (self, time) {
            (Indoor, Morning) => {
                "soft natural light streaming through windows, warm interior atmosphere"
            }
            (Indoor, Afternoon) => "bright daylight illuminating the space, clear visibility",
            (Indoor, Evening) => "golden hour light filtering in, cozy ambient lighting",
            (Indoor, Night) => "warm lamp light, intimate indoor setting with shadows",
            (Outdoor, Morning) => "fresh morning air, dewy surfaces, soft golden sunlight",
            (Outdoor, Afternoon) => "bright natural daylight, clear blue sky, vibrant colors",
            (Outdoor, Evening) => "warm sunset hues, long shadows, romantic atmosphere",
            (Outdoor, Night) => "moonlit scene, dramatic shadows, mysterious ambiance",
            (Urban, Morning) => "bustling city awakening, morning commute, clean streets",
            (Urban, Afternoon) => "busy urban environment, modern architecture, city energy",
            (Urban, Evening) => "city lights beginning to glow, rush hour atmosphere",
            (Urban, Night) => "neon lights, urban nightlife, dramatic city shadows",
            (Nature, Morning) => "pristine natural beauty, morning mist, peaceful wilderness",
            (Nature, Afternoon) => "lush natural setting, bright outdoor lighting, scenic vista",
            (Nature, Evening) => "natural golden hour, serene landscape, warm earth tones",
            (Nature, Night) => {
                "starlit natural setting, moonlight on landscape, tranquil darkness"
            }
            _ => return None,
        };
        Some(phrase)
    }
}

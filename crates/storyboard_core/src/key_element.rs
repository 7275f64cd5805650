//! Story elements picked out of a single-line prompt.

use serde::{Deserialize, Serialize};

/// A concrete element woven into a synthesized narrative arc.
///
/// Detection is by plain substring on the lower-cased prompt, so `"car"` also
/// fires on words like `"scared"`.
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
pub enum KeyElement {
    /// Cars, driving
    #[display("vehicle journey")]
    VehicleJourney,
    /// Rain, storms
    #[display("stormy weather")]
    StormyWeather,
    /// Cities
    #[display("urban setting")]
    UrbanSetting,
    /// Forests, nature
    #[display("natural environment")]
    NaturalEnvironment,
    /// Friends, teams
    #[display("companions")]
    Companions,
    /// Danger, threats
    #[display("perilous situation")]
    PerilousSituation,
}

impl KeyElement {
    /// Scan order.
    pub const ALL: [KeyElement; 6] = [
        KeyElement::VehicleJourney,
        KeyElement::StormyWeather,
        KeyElement::UrbanSetting,
        KeyElement::NaturalEnvironment,
        KeyElement::Companions,
        KeyElement::PerilousSituation,
    ];

    /// Substrings that trigger this element.
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            KeyElement::VehicleJourney => &["car", "drive"],
            KeyElement::StormyWeather => &["rain", "storm"],
            KeyElement::UrbanSetting => &["city"],
            KeyElement::NaturalEnvironment => &["forest", "nature"],
            KeyElement::Companions => &["friend", "team"],
            KeyElement::PerilousSituation => &["danger", "threat"],
        }
    }
}

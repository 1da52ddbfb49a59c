//! Observable stage of a synthesis run.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Where a synthesis run currently is.
///
/// A run always moves `Idle -> TextPending -> ImagePending -> Idle`, or
/// `Idle -> TextPending -> Idle` when the text stage fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisStage {
    /// No run in flight
    #[default]
    Idle,
    /// Waiting for the persona text
    #[strum(serialize = "text pending")]
    TextPending,
    /// Waiting for the portrait
    #[strum(serialize = "image pending")]
    ImagePending,
}

impl SynthesisStage {
    pub fn is_busy(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Progress headline for the stage.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Idle => "Waiting for neural uplink...",
            Self::TextPending => "Reconstructing Identity",
            Self::ImagePending => "Generating Bio-Metrics",
        }
    }

    /// Longer progress description for the stage.
    pub fn detail(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::TextPending => {
                "Mapping cultural DNA, professional history, and digital footprints..."
            }
            Self::ImagePending => {
                "Synthesizing facial features and localized environmental headshot..."
            }
        }
    }
}

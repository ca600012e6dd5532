//! Final habitability verdict
//!
//! Combines zone membership with composition. Only a terrestrial planet inside
//! its habitable zone is reported as habitable: the model assumes giants have
//! no solid surface to hold liquid water, whatever their temperature. That is
//! a modelling simplification, not a physical law.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::composition::CompositionCategory;

/// One of seven mutually exclusive outcomes
///
/// | Composition | In zone | Verdict                          |
/// |-------------|---------|----------------------------------|
/// | Terrestrial | yes     | `HABITABLE`                      |
/// | Terrestrial | no      | `TOO_EXTREME_TERRESTRIAL`        |
/// | Neptunian   | yes     | `TOO_EXTREME_NEPTUNIAN_IN_ZONE`  |
/// | Neptunian   | no      | `TOO_EXTREME_NEPTUNIAN`          |
/// | Jovian      | yes     | `TOO_EXTREME_JOVIAN_IN_ZONE`     |
/// | Jovian      | no      | `TOO_EXTREME_JOVIAN`             |
/// | Unknown     | either  | `UNKNOWN_COMPOSITION`            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum HabitabilityVerdict {
    Habitable,
    TooExtremeTerrestrial,
    TooExtremeNeptunianInZone,
    TooExtremeNeptunian,
    TooExtremeJovianInZone,
    TooExtremeJovian,
    UnknownComposition,
}

impl HabitabilityVerdict {
    /// Every verdict, in code order
    pub const ALL: [Self; 7] = [
        Self::Habitable,
        Self::TooExtremeTerrestrial,
        Self::TooExtremeNeptunianInZone,
        Self::TooExtremeNeptunian,
        Self::TooExtremeJovianInZone,
        Self::TooExtremeJovian,
        Self::UnknownComposition,
    ];

    /// Verdict for a planet of the given composition and zone membership
    pub fn from_zone(in_zone: bool, category: CompositionCategory) -> Self {
        match (category, in_zone) {
            (CompositionCategory::Terrestrial, true) => Self::Habitable,
            (CompositionCategory::Terrestrial, false) => Self::TooExtremeTerrestrial,
            (CompositionCategory::Neptunian, true) => Self::TooExtremeNeptunianInZone,
            (CompositionCategory::Neptunian, false) => Self::TooExtremeNeptunian,
            (CompositionCategory::Jovian, true) => Self::TooExtremeJovianInZone,
            (CompositionCategory::Jovian, false) => Self::TooExtremeJovian,
            (CompositionCategory::Unknown, _) => Self::UnknownComposition,
        }
    }

    /// Whether this is the single positive outcome
    pub fn is_habitable(&self) -> bool {
        matches!(self, Self::Habitable)
    }

    /// Numeric code (1-7) in table order
    pub fn code(&self) -> u8 {
        match self {
            Self::Habitable => 1,
            Self::TooExtremeTerrestrial => 2,
            Self::TooExtremeNeptunianInZone => 3,
            Self::TooExtremeNeptunian => 4,
            Self::TooExtremeJovianInZone => 5,
            Self::TooExtremeJovian => 6,
            Self::UnknownComposition => 7,
        }
    }

    /// Verdict for a numeric code, `None` outside 1-7
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|verdict| verdict.code() == code)
    }

    /// Identifier as it appears in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            Self::Habitable => "HABITABLE",
            Self::TooExtremeTerrestrial => "TOO_EXTREME_TERRESTRIAL",
            Self::TooExtremeNeptunianInZone => "TOO_EXTREME_NEPTUNIAN_IN_ZONE",
            Self::TooExtremeNeptunian => "TOO_EXTREME_NEPTUNIAN",
            Self::TooExtremeJovianInZone => "TOO_EXTREME_JOVIAN_IN_ZONE",
            Self::TooExtremeJovian => "TOO_EXTREME_JOVIAN",
            Self::UnknownComposition => "UNKNOWN_COMPOSITION",
        }
    }

    /// Explanation suitable for showing to a user
    pub fn message(&self) -> &'static str {
        match self {
            Self::Habitable => {
                "Your Terrestrial planet can likely foster liquid water and is habitable!"
            }
            Self::TooExtremeTerrestrial => {
                "Your Terrestrial planet experiences too extreme of temperatures to foster \
                 liquid water and is likely not habitable."
            }
            Self::TooExtremeNeptunianInZone => {
                "Despite being in its habitable zone, your Neptunian planet experiences too \
                 extreme of temperatures to foster liquid water and is likely not habitable."
            }
            Self::TooExtremeNeptunian => {
                "Your Neptunian planet experiences too extreme of temperatures to foster \
                 liquid water and is likely not habitable."
            }
            Self::TooExtremeJovianInZone => {
                "Despite being in its habitable zone, your Jovian planet experiences too \
                 extreme of temperatures to foster liquid water and is likely not habitable."
            }
            Self::TooExtremeJovian => {
                "Your Jovian planet experiences too extreme of temperatures to foster \
                 liquid water and is likely not habitable."
            }
            Self::UnknownComposition => {
                "Your planet's composition is unknown, making it likely not habitable."
            }
        }
    }
}

/// Zone membership line shown alongside the verdict
pub fn zone_message(in_zone: bool) -> &'static str {
    if in_zone {
        "Your planet is within its habitable zone!"
    } else {
        "Your planet is outside its habitable zone."
    }
}

impl std::fmt::Display for HabitabilityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

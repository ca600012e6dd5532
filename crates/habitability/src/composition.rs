//! Bulk composition inferred from mass and radius
//!
//! The first stage of the habitability pipeline. A planet is placed into one
//! of three coarse density regimes by a pair of mass and radius bands; any
//! pairing that fits no band is reported as [`CompositionCategory::Unknown`].

use serde::{Deserialize, Serialize};
use units::{Length, Mass};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Earth mass used as the reference for the composition bands (kg)
pub const REFERENCE_EARTH_MASS_KG: f64 = 5.97219e24;

/// Earth radius used as the reference for the composition bands (m)
pub const REFERENCE_EARTH_RADIUS_M: f64 = 6.378e6;

/// Coarse bulk-composition classification
///
/// | Category    | Mass band              | Radius band          |
/// |-------------|------------------------|----------------------|
/// | Terrestrial | M < 9.5 M⊕             | R < 3 R⊕             |
/// | Neptunian   | 9.5 M⊕ < M < 130 M⊕    | 3 R⊕ < R < 10 R⊕     |
/// | Jovian      | M > 130 M⊕             | R > 10 R⊕            |
/// | Unknown     | anything else          |                      |
///
/// Every band is bounded by strict inequalities, so a planet sitting exactly
/// on 9.5 M⊕, 130 M⊕, 3 R⊕ or 10 R⊕ is `Unknown`. Mass and radius must both
/// agree on a band; a dense 500 M⊕ planet the size of Earth has no category.
/// NaN inputs fail every comparison and are `Unknown` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum CompositionCategory {
    /// Rocky, Earth-like bodies
    Terrestrial,
    /// Ice giants with a water/ice mantle (Uranus, Neptune)
    Neptunian,
    /// Gas giants dominated by H/He (Jupiter, Saturn)
    Jovian,
    /// Mass and radius do not fall into a common band
    Unknown,
}

impl CompositionCategory {
    /// Upper mass bound of the terrestrial band, lower bound of the Neptunian band (kg)
    pub const TERRESTRIAL_MASS_LIMIT_KG: f64 = 9.5 * REFERENCE_EARTH_MASS_KG;

    /// Upper mass bound of the Neptunian band, lower bound of the Jovian band (kg)
    pub const JOVIAN_MASS_THRESHOLD_KG: f64 = 130.0 * REFERENCE_EARTH_MASS_KG;

    /// Upper radius bound of the terrestrial band, lower bound of the Neptunian band (m)
    pub const TERRESTRIAL_RADIUS_LIMIT_M: f64 = 3.0 * REFERENCE_EARTH_RADIUS_M;

    /// Upper radius bound of the Neptunian band, lower bound of the Jovian band (m)
    pub const JOVIAN_RADIUS_THRESHOLD_M: f64 = 10.0 * REFERENCE_EARTH_RADIUS_M;

    /// Every category, in table order
    pub const ALL: [Self; 4] = [Self::Terrestrial, Self::Neptunian, Self::Jovian, Self::Unknown];

    /// Classify a planet by its mass and radius
    ///
    /// # Examples
    /// ```
    /// use habitability::CompositionCategory;
    /// use units::{Length, Mass};
    ///
    /// let neptune = CompositionCategory::classify(
    ///     Mass::from_earth_masses(17.1),
    ///     Length::from_earth_radii(3.88),
    /// );
    /// assert_eq!(neptune, CompositionCategory::Neptunian);
    ///
    /// let inconsistent = CompositionCategory::classify(
    ///     Mass::from_earth_masses(500.0),
    ///     Length::from_earth_radii(1.0),
    /// );
    /// assert_eq!(inconsistent, CompositionCategory::Unknown);
    /// ```
    pub fn classify(mass: Mass, radius: Length) -> Self {
        let m = mass.to_kg();
        let r = radius.to_m();

        if m < Self::TERRESTRIAL_MASS_LIMIT_KG && r < Self::TERRESTRIAL_RADIUS_LIMIT_M {
            Self::Terrestrial
        } else if Self::TERRESTRIAL_MASS_LIMIT_KG < m
            && m < Self::JOVIAN_MASS_THRESHOLD_KG
            && Self::TERRESTRIAL_RADIUS_LIMIT_M < r
            && r < Self::JOVIAN_RADIUS_THRESHOLD_M
        {
            Self::Neptunian
        } else if m > Self::JOVIAN_MASS_THRESHOLD_KG && r > Self::JOVIAN_RADIUS_THRESHOLD_M {
            Self::Jovian
        } else {
            Self::Unknown
        }
    }

    /// Human-readable name for the category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Terrestrial => "Terrestrial",
            Self::Neptunian => "Neptunian",
            Self::Jovian => "Jovian",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for CompositionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

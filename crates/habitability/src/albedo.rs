//! Bond albedo estimated from bulk composition

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::composition::CompositionCategory;
use crate::error::HabitabilityError;

/// Fraction of incident starlight reflected by a planet, in [0, 1]
///
/// Construction is checked, so an `Albedo` in hand is always inside the
/// unit interval. Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Albedo(f64);

impl Albedo {
    /// Rocky surface, absorbs most of the light
    pub const TERRESTRIAL: Albedo = Albedo(0.3);
    /// Ice giant, reflects most of the light
    pub const NEPTUNIAN: Albedo = Albedo(0.7);
    /// Gas giant, absorbs about half
    pub const JOVIAN: Albedo = Albedo(0.5);
    /// Rough middle estimate for planets with no category
    pub const UNKNOWN: Albedo = Albedo(0.5);

    /// Creates an albedo, rejecting values outside [0, 1] and NaN
    pub fn new(value: f64) -> Result<Self, HabitabilityError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(HabitabilityError::InvalidAlbedo(value))
        }
    }

    /// Albedo for a composition category using the standard table
    ///
    /// # Examples
    /// ```
    /// use habitability::{Albedo, CompositionCategory};
    ///
    /// assert_eq!(Albedo::for_composition(CompositionCategory::Terrestrial).value(), 0.3);
    /// assert_eq!(Albedo::for_composition(CompositionCategory::Neptunian).value(), 0.7);
    /// ```
    pub fn for_composition(category: CompositionCategory) -> Self {
        AlbedoTable::default().lookup(category)
    }

    /// Reflected fraction
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Absorbed fraction (1 - albedo)
    pub fn absorbed_fraction(&self) -> f64 {
        1.0 - self.0
    }
}

impl TryFrom<f64> for Albedo {
    type Error = HabitabilityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Albedo> for f64 {
    fn from(albedo: Albedo) -> f64 {
        albedo.0
    }
}

/// Albedo assigned to each composition category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct AlbedoTable {
    pub terrestrial: Albedo,
    pub neptunian: Albedo,
    pub jovian: Albedo,
    pub unknown: Albedo,
}

impl AlbedoTable {
    /// Look up the albedo for a category. Total over every category.
    pub fn lookup(&self, category: CompositionCategory) -> Albedo {
        match category {
            CompositionCategory::Terrestrial => self.terrestrial,
            CompositionCategory::Neptunian => self.neptunian,
            CompositionCategory::Jovian => self.jovian,
            CompositionCategory::Unknown => self.unknown,
        }
    }
}

impl Default for AlbedoTable {
    fn default() -> Self {
        Self {
            terrestrial: Albedo::TERRESTRIAL,
            neptunian: Albedo::NEPTUNIAN,
            jovian: Albedo::JOVIAN,
            unknown: Albedo::UNKNOWN,
        }
    }
}

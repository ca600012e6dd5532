use serde::{Deserialize, Serialize};

/// Bolometric luminosity of the Sun in watts (3.827 × 10²⁶ W)
pub const SOLAR_LUMINOSITY_W: f64 = 3.827e26;

/// Radiant power emitted by a star, stored in watts.
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::from_solar_luminosities(1.0);
/// assert_eq!(sun.to_watts(), 3.827e26);
///
/// let red_dwarf = Luminosity::from_solar_luminosities(0.01);
/// assert!(red_dwarf < sun);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: watts

impl Luminosity {
    /// Creates a new `Luminosity` from a value in watts.
    pub fn from_watts(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Luminosity` from a value in solar luminosities (L☉).
    pub fn from_solar_luminosities(value: f64) -> Self {
        Self(value * SOLAR_LUMINOSITY_W)
    }

    /// Returns the luminosity in watts.
    pub fn to_watts(&self) -> f64 {
        self.0
    }

    /// Converts the luminosity to solar luminosities.
    pub fn to_solar_luminosities(&self) -> f64 {
        self.0 / SOLAR_LUMINOSITY_W
    }

    /// Returns `true` when the underlying value is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

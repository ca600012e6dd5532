use serde::{Deserialize, Serialize};

/// Mass of the Earth in kilograms (5.972 × 10²⁴ kg)
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// A physical mass quantity using f64 precision.
///
/// The `Mass` struct stores kilograms, so values handed in by an SI caller
/// pass through untouched. Planetary units are conversions on top.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// let super_earth = Mass::from_kg(3.0e25);
///
/// assert_eq!(earth.to_kg(), 5.972e24);
/// assert!(super_earth > earth);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: kilograms

impl Mass {
    /// Creates a new `Mass` from a value in kilograms.
    pub fn from_kg(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let neptune = Mass::from_earth_masses(17.1);
    /// let jupiter = Mass::from_earth_masses(317.8);
    /// ```
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_KG)
    }

    /// Returns the mass in kilograms.
    pub fn to_kg(&self) -> f64 {
        self.0
    }

    /// Returns `true` when the underlying value is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

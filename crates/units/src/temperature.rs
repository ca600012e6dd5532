use serde::{Deserialize, Serialize};

/// A physical temperature quantity using f64 precision.
///
/// Kelvin is the base unit. Equilibrium temperatures and habitable-zone
/// edge temperatures are both absolute, so no offset arithmetic leaks into
/// the physics.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let hot_edge = Temperature::from_kelvin(316.0);
/// let cold_edge = Temperature::from_kelvin(198.0);
///
/// assert!(hot_edge > cold_edge);
/// assert_eq!(hot_edge.powi(2), 99856.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Returns `true` when the underlying value is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

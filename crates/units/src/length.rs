use serde::{Deserialize, Serialize};

/// One astronomical unit in meters
pub const AU_TO_M: f64 = 1.496e11;
/// Equatorial Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6.378e6;

/// A physical length quantity using f64 precision.
///
/// Lengths are stored in meters. Planet radii and orbital distances share
/// this one type, so a radius in Earth radii and a distance in AU can be
/// compared directly without a hand-written conversion.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// let earth_radius = Length::from_earth_radii(1.0);
///
/// assert_eq!(earth_orbit.to_m(), 1.496e11);
/// assert!(earth_radius < earth_orbit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: meters

impl Length {
    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value * AU_TO_M)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(value * EARTH_RADIUS_M)
    }

    /// Returns the length in meters.
    pub fn to_m(&self) -> f64 {
        self.0
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 / AU_TO_M
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Returns `true` when the underlying value is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

//! Evaluation inputs: the planet and its host star

use serde::{Deserialize, Serialize};
use units::{Length, Luminosity, Mass};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::error::HabitabilityError;

/// Physical parameters of the planet being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct PlanetProfile {
    pub mass: Mass,
    pub radius: Length,
    /// Distance from the host star
    pub orbital_distance: Length,
}

impl PlanetProfile {
    pub fn new(mass: Mass, radius: Length, orbital_distance: Length) -> Self {
        Self {
            mass,
            radius,
            orbital_distance,
        }
    }

    /// Profile from SI values (kg, m, m)
    pub fn from_si(mass_kg: f64, radius_m: f64, distance_m: f64) -> Self {
        Self::new(
            Mass::from_kg(mass_kg),
            Length::from_meters(radius_m),
            Length::from_meters(distance_m),
        )
    }

    /// Profile from display units (Earth masses, Earth radii, AU)
    pub fn from_display(mass_earth: f64, radius_earth: f64, distance_au: f64) -> Self {
        Self::new(
            Mass::from_earth_masses(mass_earth),
            Length::from_earth_radii(radius_earth),
            Length::from_au(distance_au),
        )
    }

    /// Reject non-physical inputs: mass and radius must be positive, the
    /// orbital distance non-negative, and all three finite.
    pub fn validated(self) -> Result<Self, HabitabilityError> {
        require_positive("planet mass", self.mass.to_kg())?;
        require_positive("planet radius", self.radius.to_m())?;
        require_non_negative("orbital distance", self.orbital_distance.to_m())?;
        Ok(self)
    }
}

/// Host star parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StellarProfile {
    pub luminosity: Luminosity,
}

impl StellarProfile {
    pub fn new(luminosity: Luminosity) -> Self {
        Self { luminosity }
    }

    /// Sun-like star (L = 1 L☉)
    pub fn solar() -> Self {
        Self::new(Luminosity::from_solar_luminosities(1.0))
    }

    /// Reject negative or non-finite luminosity. A dark star (L = 0) is allowed.
    pub fn validated(self) -> Result<Self, HabitabilityError> {
        require_non_negative("stellar luminosity", self.luminosity.to_watts())?;
        Ok(self)
    }
}

fn require_positive(quantity: &'static str, value: f64) -> Result<(), HabitabilityError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HabitabilityError::InvalidInput {
            quantity,
            requirement: "finite and positive",
            value,
        })
    }
}

fn require_non_negative(quantity: &'static str, value: f64) -> Result<(), HabitabilityError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HabitabilityError::InvalidInput {
            quantity,
            requirement: "finite and non-negative",
            value,
        })
    }
}

//! Habitable-zone boundaries from a blackbody energy balance
//!
//! A planet at distance `d` from a star of luminosity `L` absorbs
//! `(1 - A) L / (4π d²)` over its cross-section and re-radiates as a
//! blackbody over its whole surface. Solving the balance for distance at a
//! fixed temperature gives
//!
//! ```text
//! d(T) = sqrt( (1 - A) L / (16 π σ T⁴) )
//! ```
//!
//! The zone is bounded by two such distances: the hot edge at 316 K and the
//! cold edge at 198 K.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::{Length, Luminosity, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::albedo::Albedo;

/// Stefan-Boltzmann constant (W·m⁻²·K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.670e-8;

/// Equilibrium temperature at the inner (hot) edge of the zone (K)
pub const INNER_EDGE_TEMPERATURE_K: f64 = 316.0;

/// Equilibrium temperature at the outer (cold) edge of the zone (K)
pub const OUTER_EDGE_TEMPERATURE_K: f64 = 198.0;

/// Habitable zone boundaries
///
/// `inner_radius <= outer_radius` holds for any non-negative luminosity and
/// albedo in [0, 1]. A dark star (L = 0) or a perfect reflector (A = 1)
/// collapses both edges to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HabitableZone {
    pub inner_radius: Length,
    pub outer_radius: Length,
}

impl HabitableZone {
    /// Zone for the standard 316 K / 198 K edge temperatures
    ///
    /// # Examples
    /// ```
    /// use habitability::{Albedo, HabitableZone};
    /// use units::{Length, Luminosity};
    ///
    /// let zone = HabitableZone::from_luminosity(
    ///     Luminosity::from_solar_luminosities(1.0),
    ///     Albedo::TERRESTRIAL,
    /// );
    /// assert!(zone.contains(Length::from_au(1.0)));
    /// assert!(!zone.contains(Length::from_au(5.2)));
    /// ```
    pub fn from_luminosity(luminosity: Luminosity, albedo: Albedo) -> Self {
        Self::with_edge_temperatures(
            luminosity,
            albedo,
            Temperature::from_kelvin(INNER_EDGE_TEMPERATURE_K),
            Temperature::from_kelvin(OUTER_EDGE_TEMPERATURE_K),
        )
    }

    /// Zone bounded by arbitrary hot and cold edge temperatures
    pub fn with_edge_temperatures(
        luminosity: Luminosity,
        albedo: Albedo,
        inner_edge: Temperature,
        outer_edge: Temperature,
    ) -> Self {
        Self {
            inner_radius: boundary_distance(luminosity, albedo, inner_edge),
            outer_radius: boundary_distance(luminosity, albedo, outer_edge),
        }
    }

    /// Inclusive on both edges
    pub fn contains(&self, distance: Length) -> bool {
        self.inner_radius <= distance && distance <= self.outer_radius
    }
}

/// Orbital distance at which a planet reaches the given equilibrium temperature
pub fn boundary_distance(
    luminosity: Luminosity,
    albedo: Albedo,
    temperature: Temperature,
) -> Length {
    let absorbed = albedo.absorbed_fraction() * luminosity.to_watts();
    let emitted_per_area = temperature.powi(4) * 16.0 * PI * STEFAN_BOLTZMANN;

    Length::from_meters((absorbed / emitted_per_area).sqrt())
}

/// Zone boundaries and whether `distance` falls inside them
///
/// Uses the standard edge temperatures. No guard on degenerate inputs: with
/// zero luminosity the zone is the single point at distance zero.
pub fn zone_bounds(
    luminosity: Luminosity,
    albedo: Albedo,
    distance: Length,
) -> (HabitableZone, bool) {
    let zone = HabitableZone::from_luminosity(luminosity, albedo);
    let in_zone = zone.contains(distance);
    (zone, in_zone)
}

/// Blackbody equilibrium temperature at a given orbital distance
///
/// T = ((1 - A) L / (16 π σ d²))^¼. Infinite at distance zero around a luminous star.
pub fn equilibrium_temperature(
    luminosity: Luminosity,
    albedo: Albedo,
    distance: Length,
) -> Temperature {
    let absorbed = albedo.absorbed_fraction() * luminosity.to_watts();
    let emitting_area_factor = 16.0 * PI * STEFAN_BOLTZMANN * distance.powi(2);

    Temperature::from_kelvin((absorbed / emitting_area_factor).powf(0.25))
}

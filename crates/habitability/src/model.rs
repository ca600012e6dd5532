//! Tunable model parameters
//!
//! The defaults reproduce the standard model exactly. A JSON document can
//! override any subset of the fields:
//!
//! ```json
//! { "innerEdgeTemperature": 320.0, "albedo": { "neptunian": 0.6 } }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use units::{Length, Luminosity, Temperature};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::albedo::{Albedo, AlbedoTable};
use crate::error::HabitabilityError;
use crate::habitable_zone::{HabitableZone, INNER_EDGE_TEMPERATURE_K, OUTER_EDGE_TEMPERATURE_K};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct HabitabilityModel {
    /// Equilibrium temperature at the hot edge of the zone
    pub inner_edge_temperature: Temperature,
    /// Equilibrium temperature at the cold edge of the zone
    pub outer_edge_temperature: Temperature,
    /// Albedo per composition category
    pub albedo: AlbedoTable,
}

impl HabitabilityModel {
    /// Parse and validate a model from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, HabitabilityError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;

        debug!(
            inner_edge_k = model.inner_edge_temperature.to_kelvin(),
            outer_edge_k = model.outer_edge_temperature.to_kelvin(),
            "habitability_model_loaded"
        );
        Ok(model)
    }

    /// Check that the edge temperatures can bound a zone
    pub fn validate(&self) -> Result<(), HabitabilityError> {
        let inner = self.inner_edge_temperature.to_kelvin();
        let outer = self.outer_edge_temperature.to_kelvin();

        let usable = inner.is_finite() && outer.is_finite() && outer > 0.0 && inner > outer;
        if !usable {
            warn!(inner_edge_k = inner, outer_edge_k = outer, "habitability_model_rejected");
            return Err(HabitabilityError::InvalidBoundaryTemperatures { inner, outer });
        }
        Ok(())
    }

    /// Zone bounded by this model's edge temperatures
    pub fn habitable_zone(&self, luminosity: Luminosity, albedo: Albedo) -> HabitableZone {
        HabitableZone::with_edge_temperatures(
            luminosity,
            albedo,
            self.inner_edge_temperature,
            self.outer_edge_temperature,
        )
    }

    /// Zone boundaries and membership of `distance` under this model
    pub fn zone_bounds(
        &self,
        luminosity: Luminosity,
        albedo: Albedo,
        distance: Length,
    ) -> (HabitableZone, bool) {
        let zone = self.habitable_zone(luminosity, albedo);
        let in_zone = zone.contains(distance);
        (zone, in_zone)
    }
}

impl Default for HabitabilityModel {
    fn default() -> Self {
        Self {
            inner_edge_temperature: Temperature::from_kelvin(INNER_EDGE_TEMPERATURE_K),
            outer_edge_temperature: Temperature::from_kelvin(OUTER_EDGE_TEMPERATURE_K),
            albedo: AlbedoTable::default(),
        }
    }
}

//! WASM bindings for habitable-zone queries in display units.

use serde::Serialize;
use units::{Length, Luminosity};
use wasm_bindgen::prelude::*;

use habitability::{equilibrium_temperature, Albedo, CompositionCategory, HabitableZone};

use crate::{from_js, to_js};

/// Get the habitable zone for a star and planet composition.
///
/// # Arguments
/// * `luminosity_solar` - Stellar luminosity in solar luminosities
/// * `composition` - `"Terrestrial"`, `"Neptunian"`, `"Jovian"` or `"Unknown"`
///
/// # Returns
/// Zone edges in AU
#[wasm_bindgen]
pub fn habitable_zone_au(luminosity_solar: f64, composition: JsValue) -> Result<JsValue, JsError> {
    let composition: CompositionCategory = from_js(composition)?;
    let zone = HabitableZone::from_luminosity(
        Luminosity::from_solar_luminosities(luminosity_solar),
        Albedo::for_composition(composition),
    );

    to_js(&HabitableZoneInfo {
        inner_edge_au: zone.inner_radius.to_au(),
        outer_edge_au: zone.outer_radius.to_au(),
    })
}

/// Equilibrium temperature in Kelvin for a planet at `distance_au`.
#[wasm_bindgen]
pub fn equilibrium_temperature_k(
    luminosity_solar: f64,
    composition: JsValue,
    distance_au: f64,
) -> Result<f64, JsError> {
    let composition: CompositionCategory = from_js(composition)?;
    let temperature = equilibrium_temperature(
        Luminosity::from_solar_luminosities(luminosity_solar),
        Albedo::for_composition(composition),
        Length::from_au(distance_au),
    );
    Ok(temperature.to_kelvin())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HabitableZoneInfo {
    inner_edge_au: f64,
    outer_edge_au: f64,
}

//! WASM bindings for planet evaluation.

use wasm_bindgen::prelude::*;

use habitability::{
    evaluate_checked, evaluate_display, evaluate_si, evaluate_with, zone_message,
    HabitabilityModel, HabitabilityVerdict, PlanetProfile, StellarProfile,
};

use crate::{from_js, to_js};

// =============================================================================
// Evaluation
// =============================================================================

/// Evaluate a planet from SI inputs.
///
/// # Arguments
/// * `mass_kg` - Planet mass in kilograms
/// * `radius_m` - Planet radius in meters
/// * `distance_m` - Orbital distance in meters
/// * `luminosity_w` - Stellar luminosity in watts
///
/// # Returns
/// An Evaluation: composition, albedo, zone edges (m), zone membership, verdict
#[wasm_bindgen]
pub fn evaluate_planet(
    mass_kg: f64,
    radius_m: f64,
    distance_m: f64,
    luminosity_w: f64,
) -> Result<JsValue, JsError> {
    to_js(&evaluate_si(mass_kg, radius_m, distance_m, luminosity_w))
}

/// Evaluate a planet from slider units.
///
/// # Arguments
/// * `mass_earth` - Planet mass in Earth masses
/// * `radius_earth` - Planet radius in Earth radii
/// * `distance_au` - Orbital distance in AU
/// * `luminosity_solar` - Stellar luminosity in solar luminosities
#[wasm_bindgen]
pub fn evaluate_planet_display(
    mass_earth: f64,
    radius_earth: f64,
    distance_au: f64,
    luminosity_solar: f64,
) -> Result<JsValue, JsError> {
    to_js(&evaluate_display(
        mass_earth,
        radius_earth,
        distance_au,
        luminosity_solar,
    ))
}

/// Evaluate a planet, rejecting non-physical inputs.
///
/// # Arguments
/// * `planet` - PlanetProfile object (`mass`, `radius`, `orbitalDistance` in SI)
/// * `star` - StellarProfile object (`luminosity` in W)
#[wasm_bindgen]
pub fn evaluate_planet_checked(planet: JsValue, star: JsValue) -> Result<JsValue, JsError> {
    let planet: PlanetProfile = from_js(planet)?;
    let star: StellarProfile = from_js(star)?;
    let result = evaluate_checked(&planet, &star)?;
    to_js(&result)
}

/// Evaluate a planet under a custom model given as JSON.
///
/// Missing model fields keep their defaults.
#[wasm_bindgen]
pub fn evaluate_planet_with_model(
    model_json: &str,
    planet: JsValue,
    star: JsValue,
) -> Result<JsValue, JsError> {
    let model = HabitabilityModel::from_json(model_json)?;
    let planet: PlanetProfile = from_js(planet)?;
    let star: StellarProfile = from_js(star)?;
    to_js(&evaluate_with(&model, &planet, &star))
}

/// The default model parameters.
#[wasm_bindgen]
pub fn default_model() -> Result<JsValue, JsError> {
    to_js(&HabitabilityModel::default())
}

// =============================================================================
// Verdict presentation
// =============================================================================

/// Human-readable explanation for a verdict identifier such as `"HABITABLE"`.
#[wasm_bindgen]
pub fn verdict_message(verdict: JsValue) -> Result<String, JsError> {
    let verdict: HabitabilityVerdict = from_js(verdict)?;
    Ok(verdict.message().to_string())
}

/// Line stating whether the planet lies within its habitable zone.
#[wasm_bindgen]
pub fn zone_membership_message(in_zone: bool) -> String {
    zone_message(in_zone).to_string()
}

//! WASM bindings for planetary habitability estimation.
//!
//! Exposes the evaluation pipeline to a JavaScript UI. The UI owns sliders,
//! rendering and display formatting; these bindings hand back plain numbers
//! and identifiers.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { evaluate_planet_display, habitable_zone_au } from 'habitability-wasm';
//!
//! await init();
//!
//! // Earth: 1 M⊕, 1 R⊕, 1 AU around a 1 L☉ star
//! const result = evaluate_planet_display(1.0, 1.0, 1.0, 1.0);
//! console.log(`${result.composition}: ${result.verdict}`);
//!
//! const zone = habitable_zone_au(1.0, "Terrestrial");
//! console.log(`Habitable zone ${zone.innerEdgeAu.toFixed(2)} AU to ${zone.outerEdgeAu.toFixed(2)} AU`);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

mod evaluation;
mod zone;

// Type aliases for unit types (serialized as numbers via serde(transparent))
#[wasm_bindgen(typescript_custom_section)]
const TS_UNIT_TYPES: &'static str = r#"
/** Mass in kilograms */
export type Mass = number;
/** Length in meters */
export type Length = number;
/** Temperature in Kelvin */
export type Temperature = number;
/** Luminosity in watts */
export type Luminosity = number;
/** Bond albedo in [0, 1] */
export type Albedo = number;
"#;

// =============================================================================
// Serialization helpers
// =============================================================================

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

pub(crate) fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

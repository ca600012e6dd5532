//! The composite evaluation: composition → albedo → zone → verdict
//!
//! Each stage only reads the output of the stages before it, and nothing is
//! cached between calls, so identical inputs always produce bit-identical
//! results.

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Length, Luminosity};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::albedo::Albedo;
use crate::composition::CompositionCategory;
use crate::error::HabitabilityError;
use crate::habitable_zone::HabitableZone;
use crate::model::HabitabilityModel;
use crate::profile::{PlanetProfile, StellarProfile};
use crate::verdict::HabitabilityVerdict;

/// Everything derived for one planet around one star
///
/// Serializes as `composition`, `albedo`, `innerRadiusM`, `outerRadiusM`,
/// `inZone`, `verdict`, with the zone edges in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct Evaluation {
    pub composition: CompositionCategory,
    pub albedo: Albedo,
    #[serde(rename = "innerRadiusM")]
    pub inner_radius: Length,
    #[serde(rename = "outerRadiusM")]
    pub outer_radius: Length,
    pub in_zone: bool,
    pub verdict: HabitabilityVerdict,
}

impl Evaluation {
    /// The zone the planet was tested against
    pub fn habitable_zone(&self) -> HabitableZone {
        HabitableZone {
            inner_radius: self.inner_radius,
            outer_radius: self.outer_radius,
        }
    }
}

/// Evaluate a planet with the standard model
///
/// # Examples
/// ```
/// use habitability::{
///     evaluate, CompositionCategory, HabitabilityVerdict, PlanetProfile, StellarProfile,
/// };
///
/// let earth = PlanetProfile::from_display(1.0, 1.0, 1.0);
/// let result = evaluate(&earth, &StellarProfile::solar());
///
/// assert_eq!(result.composition, CompositionCategory::Terrestrial);
/// assert!(result.in_zone);
/// assert_eq!(result.verdict, HabitabilityVerdict::Habitable);
/// ```
pub fn evaluate(planet: &PlanetProfile, star: &StellarProfile) -> Evaluation {
    evaluate_with(&HabitabilityModel::default(), planet, star)
}

/// Evaluate a planet under a custom model
pub fn evaluate_with(
    model: &HabitabilityModel,
    planet: &PlanetProfile,
    star: &StellarProfile,
) -> Evaluation {
    let composition = CompositionCategory::classify(planet.mass, planet.radius);
    let albedo = model.albedo.lookup(composition);
    let (habitable_zone, in_zone) =
        model.zone_bounds(star.luminosity, albedo, planet.orbital_distance);
    let verdict = HabitabilityVerdict::from_zone(in_zone, composition);

    debug!(
        composition = %composition,
        albedo = albedo.value(),
        inner_radius_au = habitable_zone.inner_radius.to_au(),
        outer_radius_au = habitable_zone.outer_radius.to_au(),
        distance_au = planet.orbital_distance.to_au(),
        in_zone,
        verdict = %verdict,
        "planet_evaluated"
    );

    Evaluation {
        composition,
        albedo,
        inner_radius: habitable_zone.inner_radius,
        outer_radius: habitable_zone.outer_radius,
        in_zone,
        verdict,
    }
}

/// Evaluate raw SI inputs (kg, m, m, W)
pub fn evaluate_si(mass_kg: f64, radius_m: f64, distance_m: f64, luminosity_w: f64) -> Evaluation {
    let planet = PlanetProfile::from_si(mass_kg, radius_m, distance_m);
    let star = StellarProfile::new(Luminosity::from_watts(luminosity_w));
    evaluate(&planet, &star)
}

/// Evaluate display-unit inputs (M⊕, R⊕, AU, L☉)
pub fn evaluate_display(
    mass_earth: f64,
    radius_earth: f64,
    distance_au: f64,
    luminosity_solar: f64,
) -> Evaluation {
    let planet = PlanetProfile::from_display(mass_earth, radius_earth, distance_au);
    let star = StellarProfile::new(Luminosity::from_solar_luminosities(luminosity_solar));
    evaluate(&planet, &star)
}

/// Evaluate after rejecting non-physical inputs
///
/// The unchecked entry points accept anything and let the arithmetic decide;
/// this one fails fast on negative, zero or non-finite values where they make
/// no physical sense.
pub fn evaluate_checked(
    planet: &PlanetProfile,
    star: &StellarProfile,
) -> Result<Evaluation, HabitabilityError> {
    let planet = planet.validated()?;
    let star = star.validated()?;
    Ok(evaluate(&planet, &star))
}

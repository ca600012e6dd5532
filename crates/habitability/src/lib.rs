//! Planetary habitability estimation
//!
//! Decides whether a hypothetical planet, given its mass, radius, orbital
//! distance and the luminosity of its star, could plausibly hold liquid
//! water. Four pure stages run in sequence:
//!
//! 1. [`CompositionCategory::classify`] - bulk composition from mass and radius
//! 2. [`Albedo::for_composition`] - reflectivity from composition
//! 3. [`HabitableZone`] - zone edges from luminosity and albedo, plus membership
//! 4. [`HabitabilityVerdict::from_zone`] - the final verdict
//!
//! [`evaluate`] runs the whole pipeline.

pub mod albedo;
pub mod composition;
pub mod error;
pub mod evaluation;
pub mod habitable_zone;
pub mod model;
pub mod profile;
pub mod verdict;

// Re-export key types at crate root
pub use albedo::{Albedo, AlbedoTable};
pub use composition::CompositionCategory;
pub use error::HabitabilityError;
pub use evaluation::{
    evaluate, evaluate_checked, evaluate_display, evaluate_si, evaluate_with, Evaluation,
};
pub use habitable_zone::{equilibrium_temperature, zone_bounds, HabitableZone};
pub use model::HabitabilityModel;
pub use profile::{PlanetProfile, StellarProfile};
pub use verdict::{zone_message, HabitabilityVerdict};

#[cfg(test)]
mod habitable_zone_test;
#[cfg(test)]
mod model_test;
#[cfg(test)]
mod profile_test;

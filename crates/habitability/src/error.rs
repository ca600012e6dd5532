//! Errors raised at the validation seams of the engine.
//!
//! The classification pipeline itself is total; these only surface from
//! checked constructors and model loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HabitabilityError {
    /// A physical input was non-finite or outside its physical domain.
    #[error("{quantity} must be {requirement}, got {value}")]
    InvalidInput {
        quantity: &'static str,
        requirement: &'static str,
        value: f64,
    },
    /// Albedo outside the closed interval [0, 1].
    #[error("albedo must lie in [0, 1], got {0}")]
    InvalidAlbedo(f64),
    /// Habitable-zone edge temperatures that cannot bound a zone.
    #[error(
        "edge temperatures must be finite and positive with inner > outer, got inner {inner} K, outer {outer} K"
    )]
    InvalidBoundaryTemperatures { inner: f64, outer: f64 },
    /// Model configuration was not valid JSON or had the wrong shape.
    #[error("failed to parse habitability model: {0}")]
    ModelParse(#[from] serde_json::Error),
}

//! Typed physical quantities used by the habitability engine.
//!
//! Every quantity stores its value in the SI base unit (kg, m, K, W) and
//! offers constructors and accessors for the astronomical display units a
//! caller typically works in.

pub mod length;
pub mod luminosity;
pub mod mass;
pub mod temperature;


pub use length::{Length, AU_TO_M, EARTH_RADIUS_M};
pub use luminosity::{Luminosity, SOLAR_LUMINOSITY_W};
pub use mass::{Mass, EARTH_MASS_KG};
pub use temperature::Temperature;

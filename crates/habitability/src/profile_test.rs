use units::{Length, Luminosity, Mass};

use crate::error::HabitabilityError;
use crate::profile::{PlanetProfile, StellarProfile};

#[test]
fn test_display_units_convert_to_si() {
    let earth = PlanetProfile::from_display(1.0, 1.0, 1.0);

    assert_eq!(earth.mass.to_kg(), 5.972e24);
    assert_eq!(earth.radius.to_m(), 6.378e6);
    assert_eq!(earth.orbital_distance.to_m(), 1.496e11);
    assert_eq!(earth, PlanetProfile::from_si(5.972e24, 6.378e6, 1.496e11));

    assert_eq!(StellarProfile::solar().luminosity.to_watts(), 3.827e26);
}

#[test]
fn test_valid_profiles_pass_through() {
    let planet = PlanetProfile::from_display(1.0, 1.0, 0.0);
    assert_eq!(planet.validated().unwrap(), planet);

    let dark = StellarProfile::new(Luminosity::from_watts(0.0));
    assert_eq!(dark.validated().unwrap(), dark);
}

#[test]
fn test_non_physical_planets_are_rejected() {
    let cases = [
        (PlanetProfile::from_si(0.0, 6.378e6, 1.0), "planet mass"),
        (PlanetProfile::from_si(-1.0, 6.378e6, 1.0), "planet mass"),
        (PlanetProfile::from_si(5.972e24, 0.0, 1.0), "planet radius"),
        (PlanetProfile::from_si(5.972e24, 6.378e6, -1.0), "orbital distance"),
        (PlanetProfile::from_si(f64::NAN, 6.378e6, 1.0), "planet mass"),
        (
            PlanetProfile::new(
                Mass::from_kg(5.972e24),
                Length::from_meters(f64::INFINITY),
                Length::from_au(1.0),
            ),
            "planet radius",
        ),
    ];

    for (planet, expected) in cases {
        match planet.validated() {
            Err(HabitabilityError::InvalidInput { quantity, .. }) => {
                assert_eq!(quantity, expected, "{:?}", planet)
            }
            other => panic!("expected {} to be rejected, got {:?}", expected, other),
        }
    }
}

#[test]
fn test_non_physical_stars_are_rejected() {
    let negative = StellarProfile::new(Luminosity::from_watts(-1.0));
    let err = negative.validated().unwrap_err();
    assert_eq!(
        err.to_string(),
        "stellar luminosity must be finite and non-negative, got -1"
    );

    let infinite = StellarProfile::new(Luminosity::from_watts(f64::INFINITY));
    assert!(infinite.validated().is_err());
}

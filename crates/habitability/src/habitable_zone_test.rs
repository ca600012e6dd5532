//! Tests for habitable-zone boundaries

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use units::{Length, Luminosity, Temperature};

use crate::albedo::Albedo;
use crate::habitable_zone::{
    boundary_distance, equilibrium_temperature, zone_bounds, HabitableZone,
    INNER_EDGE_TEMPERATURE_K, OUTER_EDGE_TEMPERATURE_K,
};

fn sun() -> Luminosity {
    Luminosity::from_solar_luminosities(1.0)
}

// ========== Boundary Distance Tests ==========

#[test]
fn test_sun_terrestrial_zone() {
    let zone = HabitableZone::from_luminosity(sun(), Albedo::TERRESTRIAL);

    assert_relative_eq!(zone.inner_radius.to_au(), 0.649, epsilon = 1e-3);
    assert_relative_eq!(zone.outer_radius.to_au(), 1.653, epsilon = 1e-3);
}

#[test]
fn test_sun_giant_zones() {
    let neptunian = HabitableZone::from_luminosity(sun(), Albedo::NEPTUNIAN);
    assert_relative_eq!(neptunian.inner_radius.to_au(), 0.425, epsilon = 1e-3);
    assert_relative_eq!(neptunian.outer_radius.to_au(), 1.082, epsilon = 1e-3);

    let jovian = HabitableZone::from_luminosity(sun(), Albedo::JOVIAN);
    assert_relative_eq!(jovian.inner_radius.to_au(), 0.549, epsilon = 1e-3);
    assert_relative_eq!(jovian.outer_radius.to_au(), 1.397, epsilon = 1e-3);
}

#[test]
fn test_zone_scales_with_root_luminosity() {
    let base = HabitableZone::from_luminosity(sun(), Albedo::TERRESTRIAL);
    let bright = HabitableZone::from_luminosity(
        Luminosity::from_solar_luminosities(100.0),
        Albedo::TERRESTRIAL,
    );

    assert_relative_eq!(bright.inner_radius.to_m() / base.inner_radius.to_m(), 10.0, epsilon = 1e-9);
    assert_relative_eq!(bright.outer_radius.to_m() / base.outer_radius.to_m(), 10.0, epsilon = 1e-9);
}

#[test]
fn test_edge_ratio_is_temperature_ratio_squared() {
    let zone = HabitableZone::from_luminosity(sun(), Albedo::JOVIAN);
    let expected = (INNER_EDGE_TEMPERATURE_K / OUTER_EDGE_TEMPERATURE_K).powi(2);

    assert_relative_eq!(zone.outer_radius.to_m() / zone.inner_radius.to_m(), expected, epsilon = 1e-9);
}

#[test]
fn test_inner_never_exceeds_outer() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..10_000 {
        let luminosity = Luminosity::from_solar_luminosities(rng.random_range(0.0..500.0));
        let albedo = Albedo::new(rng.random_range(0.0..=1.0)).unwrap();
        let zone = HabitableZone::from_luminosity(luminosity, albedo);

        assert!(
            zone.inner_radius <= zone.outer_radius,
            "L = {:?}, A = {:?}: {:?}",
            luminosity,
            albedo,
            zone
        );
    }
}

// ========== Degenerate Input Tests ==========

#[test]
fn test_dark_star_collapses_zone() {
    let (zone, in_zone) = zone_bounds(Luminosity::from_watts(0.0), Albedo::TERRESTRIAL, Length::from_meters(0.0));
    assert_eq!(zone.inner_radius, Length::from_meters(0.0));
    assert_eq!(zone.outer_radius, Length::from_meters(0.0));
    assert!(in_zone, "distance zero is the only point in a zero-width zone");

    let (_, in_zone) = zone_bounds(Luminosity::from_watts(0.0), Albedo::TERRESTRIAL, Length::from_au(1.0));
    assert!(!in_zone);
}

#[test]
fn test_perfect_reflector_collapses_zone() {
    let mirror = Albedo::new(1.0).unwrap();
    let zone = HabitableZone::from_luminosity(sun(), mirror);

    assert_eq!(zone.inner_radius.to_m(), 0.0);
    assert_eq!(zone.outer_radius.to_m(), 0.0);
}

// ========== Membership Tests ==========

#[test]
fn test_membership_is_inclusive() {
    let zone = HabitableZone::from_luminosity(sun(), Albedo::TERRESTRIAL);

    assert!(zone.contains(zone.inner_radius));
    assert!(zone.contains(zone.outer_radius));
    assert!(zone.contains(Length::from_au(1.0)));
    assert!(!zone.contains(Length::from_au(0.39))); // Mercury
    assert!(!zone.contains(Length::from_au(5.2))); // Jupiter
    assert!(!zone.contains(Length::from_meters(f64::NAN)));
}

#[test]
fn test_zone_bounds_matches_zone() {
    let distance = Length::from_au(1.2);
    let (zone, in_zone) = zone_bounds(sun(), Albedo::JOVIAN, distance);

    assert_eq!(zone, HabitableZone::from_luminosity(sun(), Albedo::JOVIAN));
    assert_eq!(in_zone, zone.contains(distance));
    assert!(in_zone);
}

// ========== Equilibrium Temperature Tests ==========

#[test]
fn test_equilibrium_temperature_earth() {
    let temp = equilibrium_temperature(sun(), Albedo::TERRESTRIAL, Length::from_au(1.0));
    assert!(
        (temp.to_kelvin() - 255.0).abs() < 1.0,
        "Earth equilibrium temp should be ~255K, got {:?}",
        temp
    );
}

#[test]
fn test_equilibrium_temperature_inverts_boundary_distance() {
    for kelvin in [OUTER_EDGE_TEMPERATURE_K, 250.0, INNER_EDGE_TEMPERATURE_K] {
        let target = Temperature::from_kelvin(kelvin);
        let distance = boundary_distance(sun(), Albedo::NEPTUNIAN, target);
        let temp = equilibrium_temperature(sun(), Albedo::NEPTUNIAN, distance);

        assert_relative_eq!(temp.to_kelvin(), kelvin, epsilon = 1e-9);
    }
}

#[test]
fn test_planets_in_zone_are_temperate() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    let zone = HabitableZone::from_luminosity(sun(), Albedo::TERRESTRIAL);

    for _ in 0..1_000 {
        let distance = Length::from_meters(
            rng.random_range(zone.inner_radius.to_m()..=zone.outer_radius.to_m()),
        );
        let temp = equilibrium_temperature(sun(), Albedo::TERRESTRIAL, distance).to_kelvin();

        assert!(temp <= INNER_EDGE_TEMPERATURE_K + 1e-9, "{} K", temp);
        assert!(temp >= OUTER_EDGE_TEMPERATURE_K - 1e-9, "{} K", temp);
    }
}

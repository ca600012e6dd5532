use units::{Length, Luminosity, Temperature};

use crate::albedo::{Albedo, AlbedoTable};
use crate::composition::CompositionCategory;
use crate::error::HabitabilityError;
use crate::habitable_zone::HabitableZone;
use crate::model::HabitabilityModel;

#[test]
fn test_default_model_matches_standard_zone() {
    let model = HabitabilityModel::default();
    let sun = Luminosity::from_solar_luminosities(1.0);

    assert_eq!(model.inner_edge_temperature.to_kelvin(), 316.0);
    assert_eq!(model.outer_edge_temperature.to_kelvin(), 198.0);
    assert_eq!(model.albedo, AlbedoTable::default());

    for category in CompositionCategory::ALL {
        let albedo = model.albedo.lookup(category);
        assert_eq!(
            model.habitable_zone(sun, albedo),
            HabitableZone::from_luminosity(sun, albedo)
        );
    }
}

#[test]
fn test_empty_json_is_default_model() {
    let model = HabitabilityModel::from_json("{}").unwrap();
    assert_eq!(model, HabitabilityModel::default());
}

#[test]
fn test_partial_override() {
    let model = HabitabilityModel::from_json(
        r#"{ "innerEdgeTemperature": 373.15, "albedo": { "neptunian": 0.6 } }"#,
    )
    .unwrap();

    assert_eq!(model.inner_edge_temperature, Temperature::from_kelvin(373.15));
    assert_eq!(model.outer_edge_temperature.to_kelvin(), 198.0);
    assert_eq!(model.albedo.neptunian.value(), 0.6);
    assert_eq!(model.albedo.terrestrial, Albedo::TERRESTRIAL);
}

#[test]
fn test_wider_edges_widen_the_zone() {
    let sun = Luminosity::from_solar_luminosities(1.0);
    let standard = HabitabilityModel::default();
    let generous = HabitabilityModel::from_json(
        r#"{ "innerEdgeTemperature": 373.15, "outerEdgeTemperature": 173.15 }"#,
    )
    .unwrap();

    let narrow = standard.habitable_zone(sun, Albedo::TERRESTRIAL);
    let wide = generous.habitable_zone(sun, Albedo::TERRESTRIAL);
    assert!(wide.inner_radius < narrow.inner_radius);
    assert!(wide.outer_radius > narrow.outer_radius);

    // 0.5 AU is too hot for the standard zone but inside the generous one
    let orbit = Length::from_au(0.5);
    assert!(!standard.zone_bounds(sun, Albedo::TERRESTRIAL, orbit).1);
    assert!(generous.zone_bounds(sun, Albedo::TERRESTRIAL, orbit).1);
}

#[test]
fn test_inverted_edges_are_rejected() {
    let result = HabitabilityModel::from_json(
        r#"{ "innerEdgeTemperature": 150.0, "outerEdgeTemperature": 300.0 }"#,
    );

    match result {
        Err(HabitabilityError::InvalidBoundaryTemperatures { inner, outer }) => {
            assert_eq!(inner, 150.0);
            assert_eq!(outer, 300.0);
        }
        other => panic!("expected InvalidBoundaryTemperatures, got {:?}", other),
    }
}

#[test]
fn test_non_positive_edges_are_rejected() {
    let model = HabitabilityModel {
        outer_edge_temperature: Temperature::from_kelvin(0.0),
        ..HabitabilityModel::default()
    };
    assert!(model.validate().is_err());

    let model = HabitabilityModel {
        inner_edge_temperature: Temperature::from_kelvin(f64::INFINITY),
        ..HabitabilityModel::default()
    };
    assert!(model.validate().is_err());
}

#[test]
fn test_invalid_albedo_is_rejected() {
    let result = HabitabilityModel::from_json(r#"{ "albedo": { "jovian": 1.2 } }"#);
    assert!(matches!(result, Err(HabitabilityError::ModelParse(_))));
}

#[test]
fn test_malformed_json_is_rejected() {
    let result = HabitabilityModel::from_json("{ innerEdgeTemperature: ");
    assert!(matches!(result, Err(HabitabilityError::ModelParse(_))));
}

#[test]
fn test_model_round_trips_through_json() {
    let model = HabitabilityModel::default();
    let json = serde_json::to_string(&model).unwrap();

    assert!(json.contains("\"innerEdgeTemperature\":316.0"), "{}", json);
    assert_eq!(HabitabilityModel::from_json(&json).unwrap(), model);
}

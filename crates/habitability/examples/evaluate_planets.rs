//! Evaluate Solar System analogs around a Sun-like star
//!
//! Usage: RUST_LOG=habitability=debug cargo run -p habitability --example evaluate_planets

use habitability::{equilibrium_temperature, evaluate, PlanetProfile, StellarProfile};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // (name, mass M⊕, radius R⊕, distance AU)
    let planets = [
        ("Mercury", 0.055, 0.383, 0.39),
        ("Venus", 0.815, 0.949, 0.723),
        ("Earth", 1.0, 1.0, 1.0),
        ("Mars", 0.107, 0.532, 1.524),
        ("Super-Earth", 5.0, 1.6, 1.2),
        ("Jupiter", 317.8, 11.2, 5.2),
        ("Saturn", 95.2, 9.45, 9.54),
        ("Uranus", 14.5, 4.0, 19.19),
        ("Neptune", 17.1, 3.88, 30.1),
        ("Iron giant", 500.0, 1.0, 1.0),
    ];

    let star = StellarProfile::solar();

    println!("planet,composition,albedo,hz_inner_au,hz_outer_au,t_eq_k,in_zone,code,verdict");

    for (name, mass, radius, distance) in planets {
        let planet = PlanetProfile::from_display(mass, radius, distance);
        let result = evaluate(&planet, &star);
        let t_eq = equilibrium_temperature(star.luminosity, result.albedo, planet.orbital_distance);

        println!(
            "{},{},{:.2},{:.2},{:.2},{:.0},{},{},{}",
            name,
            result.composition,
            result.albedo.value(),
            result.inner_radius.to_au(),
            result.outer_radius.to_au(),
            t_eq.to_kelvin(),
            result.in_zone,
            result.verdict.code(),
            result.verdict,
        );
    }

    eprintln!(
        "Evaluated {} planets against a {:.2} L☉ star",
        planets.len(),
        star.luminosity.to_solar_luminosities()
    );
}

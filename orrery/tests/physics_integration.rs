//! Integration tests for the simulator driven through its public API.

mod fixtures;

use approx::assert_relative_eq;
use common::constants::{AU, KM};
use glam::DVec2;
use orrery::{scenario, BodyEntry, BuildError, SystemBuilder};

#[test]
fn distance_to_primary_after_one_substep() {
    let mut sim = fixtures::two_body(DVec2::new(1.496e11, 0.0), DVec2::ZERO);
    sim.step(900.0);

    let earth = sim.body("Earth").unwrap();
    // Measured before the body moved this substep
    assert_relative_eq!(earth.distance_to_primary(), 1.496e11, max_relative = 1e-9);
    assert!(earth.velocity.x < 0.0, "should fall toward the sun");
    assert_relative_eq!(earth.velocity.y, 0.0, epsilon = 1e-12);
}

#[test]
fn circular_orbit_stays_within_two_percent_for_a_year() {
    let r = AU;
    let mut sim = fixtures::two_body(DVec2::new(0.0, r), DVec2::new(fixtures::circular_speed(r), 0.0));

    // One year of 900 s steps
    let steps = 35_064;
    let mut min_r = f64::MAX;
    let mut max_r = 0.0_f64;
    for _ in 0..steps {
        sim.step(900.0);
        let earth = sim.body("Earth").unwrap();
        let sun = sim.primary();
        let d = (earth.position - sun.position).length();
        min_r = min_r.min(d);
        max_r = max_r.max(d);
    }

    assert!(min_r > 0.98 * r, "orbit shrank to {} AU", min_r / AU);
    assert!(max_r < 1.02 * r, "orbit grew to {} AU", max_r / AU);
}

#[test]
fn trail_holds_exactly_the_latest_positions() {
    let capacity = 10;
    let mut sim = fixtures::earth_moon(capacity, 2);

    let mut history = Vec::new();
    for _ in 0..25 {
        sim.step(900.0);
        history.push(sim.body("Earth").unwrap().position);
    }

    let trail: Vec<DVec2> = sim.body("Earth").unwrap().trail().iter().copied().collect();
    assert_eq!(trail.len(), capacity);
    assert_eq!(trail, history[history.len() - capacity..]);
}

#[test]
fn moons_and_primary_never_draw_trails() {
    let mut sim = fixtures::earth_moon(1_000, 1);
    sim.advance_frame(200, 900.0);

    let moon = sim.body("Moon").unwrap();
    assert!(moon.trail().is_empty());
    assert!(moon.trail_samples().is_empty());
    assert!(sim.primary().trail_samples().is_empty());
    assert!(!sim.body("Earth").unwrap().trail_samples().is_empty());
}

#[test]
fn moon_stays_near_its_planet() {
    let mut sim = fixtures::earth_moon(0, 1);
    // Roughly one lunar month
    sim.advance_frame(2_900, 900.0);

    let earth = sim.body("Earth").unwrap().position;
    let moon = sim.body("Moon").unwrap().position;
    let separation = (moon - earth).length();
    assert!(
        separation > 200_000.0 * KM && separation < 600_000.0 * KM,
        "moon drifted to {} km",
        separation / KM
    );
}

#[test]
fn duplicate_names_are_rejected() {
    let result = SystemBuilder::new()
        .add(fixtures::sun())
        .add(BodyEntry::orbiting("Sun", "Earth", 1.0, 1.0, [0, 0, 0]))
        .add(BodyEntry::orbiting("Sun", "Earth", 1.0, 1.0, [0, 0, 0]))
        .build();
    assert_eq!(result.err(), Some(BuildError::DuplicateName("Earth".to_string())));
}

#[test]
fn builtin_system_runs_a_frame_and_keeps_every_body() {
    let mut sim = scenario::solar_system().build().unwrap();
    let names: Vec<String> = sim.bodies().iter().map(|b| b.name.clone()).collect();

    sim.advance_frame(24, 1_800.0);

    let after: Vec<String> = sim.bodies().iter().map(|b| b.name.clone()).collect();
    assert_eq!(names, after);
    assert!(sim
        .bodies()
        .iter()
        .all(|b| b.position.is_finite() && b.velocity.is_finite()));
}

#[test]
fn bundled_inner_planets_scenario_builds() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    let entries = orrery::config::load_scenario(&dir.join("inner_planets.yaml")).unwrap();
    let sim = SystemBuilder::new().extend(entries).build().unwrap();

    assert_eq!(sim.reference_order(), ["Sun", "Mercury", "Venus", "Earth", "Mars"]);
    assert_eq!(sim.parent_of("Deimos").map(|b| b.name.as_str()), Some("Mars"));

    let config = orrery::AppConfig::load(&dir.join("inner_view.yaml")).unwrap();
    assert_eq!(config.pixels_per_au, 250.0);
    assert_eq!(config.reference, "Sun");
    assert_eq!(config.width, 1200);
}

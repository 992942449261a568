//! Shared fixtures for integration tests.

#![allow(dead_code)]

use common::constants::{AU, G, KM};
use glam::DVec2;
use orrery::{BodyEntry, Simulator, SystemBuilder};

pub const SUN_MASS: f64 = 1.989e30;
pub const EARTH_MASS: f64 = 5.972e24;

pub fn sun() -> BodyEntry {
    BodyEntry::primary("Sun", SUN_MASS, 15.0, [253, 184, 19])
}

/// Sun plus one body at `offset` with `velocity`, trail off
pub fn two_body(offset: DVec2, velocity: DVec2) -> Simulator {
    SystemBuilder::new()
        .add(sun())
        .add(BodyEntry::orbiting("Sun", "Earth", EARTH_MASS, 7.0, [107, 147, 214]).at(offset, velocity))
        .build()
        .expect("two-body system is valid")
}

/// Sun, Earth with a trail, and the Moon
pub fn earth_moon(trail_capacity: usize, trail_stride: usize) -> Simulator {
    SystemBuilder::new()
        .add(sun())
        .add(
            BodyEntry::orbiting("Sun", "Earth", EARTH_MASS, 7.0, [107, 147, 214])
                .at(DVec2::new(0.0, AU), DVec2::new(29.78 * KM, 0.0))
                .with_trail(trail_capacity, trail_stride),
        )
        .add(
            BodyEntry::orbiting("Earth", "Moon", 7.34767301e22, 3.0, [128, 128, 128])
                .at(DVec2::new(0.0, -384_400.0 * KM), DVec2::new(-1.022 * KM, 0.0))
                .with_trail(20, 1),
        )
        .build()
        .expect("earth-moon system is valid")
}

/// Speed of a circular orbit around the sun at radius `r`
pub fn circular_speed(r: f64) -> f64 {
    (G * SUN_MASS / r).sqrt()
}

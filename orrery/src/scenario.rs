//! Built-in solar system
//!
//! Planets start on the y axis at their mean distance with a purely
//! tangential (x) velocity; the two moons are placed relative to their
//! planet. Declaration order is the integration order.

use common::constants::{AU, KM};
use glam::DVec2;

use crate::body::Ring;
use crate::builder::{BodyEntry, SystemBuilder};

/// Offset along y and speed along x, both relative to the parent
fn placed(entry: BodyEntry, offset_y: f64, speed_x: f64) -> BodyEntry {
    entry.at(DVec2::new(0.0, offset_y), DVec2::new(speed_x, 0.0))
}

/// Sun, eight planets, the Moon and Deimos
pub fn solar_system() -> SystemBuilder {
    SystemBuilder::new()
        .add(BodyEntry::primary("Sun", 1.989e30, 15.0, [253, 184, 19]))
        .add(
            placed(BodyEntry::orbiting("Sun", "Earth", 5.972e24, 7.0, [107, 147, 214]), AU, 29.78 * KM)
                .with_trail(17_500, 150),
        )
        .add(
            placed(
                BodyEntry::orbiting("Earth", "Moon", 7.34767301e22, 3.0, [128, 128, 128]),
                -384_400.0 * KM,
                -1.022 * KM,
            )
            .with_trail(20, 1),
        )
        .add(
            placed(BodyEntry::orbiting("Sun", "Mars", 6.39e23, 5.0, [193, 68, 14]), 1.5 * AU, 24.08 * KM)
                .with_trail(32_500, 300),
        )
        // Phobos orbits too tightly for this step size and is left out.
        .add(
            placed(
                BodyEntry::orbiting("Mars", "Deimos", 1.8e15, 1.0, [138, 119, 163]),
                23_436.0 * KM,
                1.3513 * KM,
            )
            .with_trail(20, 1),
        )
        .add(
            placed(BodyEntry::orbiting("Sun", "Venus", 4.867e24, 6.0, [165, 124, 27]), -0.7 * AU, -35.02 * KM)
                .with_trail(10_000, 100),
        )
        .add(
            placed(BodyEntry::orbiting("Sun", "Mercury", 3.285e23, 4.0, [173, 168, 165]), -0.4 * AU, -47.0 * KM)
                .with_trail(7_000, 70),
        )
        .add(
            placed(BodyEntry::orbiting("Sun", "Jupiter", 1.89813e27, 14.0, [227, 220, 203]), -5.2 * AU, -13.06 * KM)
                .with_trail(300_000, 1_000),
        )
        .add(
            placed(BodyEntry::orbiting("Sun", "Saturn", 5.683e26, 13.0, [234, 214, 184]), 9.5 * AU, 9.6725 * KM)
                .with_trail(600_000, 2_000)
                .with_ring(Ring {
                    color: [206, 184, 184],
                    gap: 6.0,
                    width: 4.0,
                }),
        )
        .add(
            placed(BodyEntry::orbiting("Sun", "Uranus", 8.681e25, 10.0, [172, 229, 238]), 18.2 * AU, 6.81 * KM)
                .with_trail(750_000, 2_500),
        )
        .add(
            placed(BodyEntry::orbiting("Sun", "Neptune", 1.024e26, 10.0, [63, 84, 186]), -30.0 * AU, 5.43 * KM)
                .with_trail(2_000_000, 10_000),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyKind;

    #[test]
    fn builds_the_full_system() {
        let sim = solar_system().build().unwrap();
        assert_eq!(sim.bodies().len(), 11);
        assert_eq!(sim.primary().name, "Sun");
        assert_eq!(
            sim.reference_order(),
            ["Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_eq!(sim.moons().get("Moon").map(String::as_str), Some("Earth"));
        assert_eq!(sim.moons().get("Deimos").map(String::as_str), Some("Mars"));
    }

    #[test]
    fn moons_inherit_planet_motion() {
        let sim = solar_system().build().unwrap();
        let deimos = sim.body("Deimos").unwrap();
        assert_eq!(deimos.kind, BodyKind::Moon);
        assert_eq!(deimos.position, DVec2::new(0.0, 1.5 * AU + 23_436.0 * KM));
        assert_eq!(deimos.velocity, DVec2::new(24.08 * KM + 1.3513 * KM, 0.0));
    }

    #[test]
    fn only_saturn_has_a_ring() {
        let sim = solar_system().build().unwrap();
        let ringed: Vec<&str> = sim
            .bodies()
            .iter()
            .filter(|b| b.ring.is_some())
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(ringed, vec!["Saturn"]);
    }
}

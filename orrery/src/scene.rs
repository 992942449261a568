//! Everything drawn in one frame, in pixels
//!
//! Built from read-only simulation state; the GPU renderer draws the discs
//! and trails, the overlay draws the text.

use common::constants::{AU, KM};
use glam::{DVec2, Vec2};

use crate::controls::Controls;
use crate::simulator::Simulator;
use crate::view::{ScreenPosition, View};

const WHITE: [u8; 3] = [255, 255, 255];

/// A filled circle, or an annulus when `inner_radius > 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: ScreenPosition,
    pub radius: f32,
    pub inner_radius: f32,
    pub color: [u8; 3],
}

/// An open polyline through past positions
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    pub points: Vec<ScreenPosition>,
    pub color: [u8; 3],
}

/// Text placed on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub position: ScreenPosition,
    pub size: f32,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub discs: Vec<Disc>,
    pub trails: Vec<Trail>,
    /// Body names, centered on `position`
    pub labels: Vec<Text>,
    /// Diagnostics, anchored at their top-left corner
    pub hud: Vec<Text>,
}

impl Scene {
    pub fn build(sim: &Simulator, controls: &Controls, view: &View) -> Self {
        let mut scene = Scene::default();

        for body in sim.bodies() {
            let offset = view.body_offset(body, sim);
            let center = view.project(body.position, offset);
            let radius = view.display_radius(body.radius);

            if controls.show_trails {
                let points: Vec<ScreenPosition> = body
                    .trail_samples()
                    .into_iter()
                    .map(|p| view.project(p, offset))
                    .collect();
                if points.len() >= 2 {
                    scene.trails.push(Trail {
                        points,
                        color: body.color,
                    });
                }
            }

            if let Some(ring) = body.ring {
                let outer = radius + ring.gap;
                scene.discs.push(Disc {
                    center,
                    radius: outer,
                    inner_radius: (outer - ring.width).max(0.0),
                    color: ring.color,
                });
            }

            scene.discs.push(Disc {
                center,
                radius,
                inner_radius: 0.0,
                color: body.color,
            });

            if controls.show_labels && !body.is_primary() && !body.is_moon() {
                scene.labels.push(Text {
                    text: body.name.clone(),
                    position: center - Vec2::new(0.0, view.label_lift(body.radius)),
                    size: 14.0,
                    color: WHITE,
                });
            }
        }

        scene.hud = hud_lines(sim, controls);
        scene
    }
}

/// Rate, zoom and distance-to-primary readouts
pub fn hud_lines(sim: &Simulator, controls: &Controls) -> Vec<Text> {
    let at = |y: f64| DVec2::new(10.0, y).as_vec2();
    let primary = &sim.primary().name;

    let mut lines = vec![
        Text {
            text: format!("Scale (relative): {:.0}", controls.scale * AU),
            position: at(55.0),
            size: 16.0,
            color: WHITE,
        },
        Text {
            text: format!("Steps: {}", controls.substeps),
            position: at(75.0),
            size: 16.0,
            color: WHITE,
        },
        Text {
            text: format!("Timescale: {}", controls.time_scale),
            position: at(95.0),
            size: 16.0,
            color: WHITE,
        },
    ];

    for (i, name) in sim.reference_order().iter().enumerate() {
        if let Some(body) = sim.body(name) {
            lines.push(Text {
                text: format!(
                    "Km from {} ({}): {:.1}",
                    primary,
                    body.name,
                    body.distance_to_primary() / KM
                ),
                position: at(115.0 + i as f64 * 25.0),
                size: 14.0,
                color: body.color,
            });
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::solar_system;

    fn setup() -> (Simulator, Controls, View) {
        let sim = solar_system().build().unwrap();
        let controls = Controls::default();
        let view = View::new(1200.0, 900.0, 100.0, controls.scale, DVec2::ZERO);
        (sim, controls, view)
    }

    #[test]
    fn one_disc_per_body_plus_rings() {
        let (sim, controls, view) = setup();
        let scene = Scene::build(&sim, &controls, &view);
        assert_eq!(scene.discs.len(), sim.bodies().len() + 1);

        let ring = scene.discs.iter().find(|d| d.inner_radius > 0.0).unwrap();
        assert_eq!(ring.color, [206, 184, 184]);
        assert!((ring.radius - ring.inner_radius - 4.0).abs() < 1e-5);
    }

    #[test]
    fn labels_skip_primary_and_moons() {
        let (sim, controls, view) = setup();
        let scene = Scene::build(&sim, &controls, &view);
        let names: Vec<&str> = scene.labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(names.len(), 8);
        assert!(!names.contains(&"Sun"));
        assert!(!names.contains(&"Moon"));
        assert!(!names.contains(&"Deimos"));

        let hidden = Controls {
            show_labels: false,
            ..controls
        };
        assert!(Scene::build(&sim, &hidden, &view).labels.is_empty());
    }

    #[test]
    fn trails_appear_after_enough_history() {
        let (mut sim, controls, view) = setup();
        assert!(Scene::build(&sim, &controls, &view).trails.is_empty());

        // Mercury keeps every 70th point and needs more than 140 entries.
        sim.advance_frame(141, 900.0);
        let scene = Scene::build(&sim, &controls, &view);
        assert_eq!(scene.trails.len(), 1);
        assert_eq!(scene.trails[0].color, [173, 168, 165]);

        let hidden = Controls {
            show_trails: false,
            ..controls
        };
        assert!(Scene::build(&sim, &hidden, &view).trails.is_empty());
    }

    #[test]
    fn hud_lists_every_reference_body() {
        let (mut sim, controls, _) = setup();
        sim.step(900.0);
        let lines = hud_lines(&sim, &controls);

        assert_eq!(lines[0].text, "Scale (relative): 50");
        assert_eq!(lines[1].text, "Steps: 1");
        assert_eq!(lines[2].text, "Timescale: 900");
        assert_eq!(lines.len(), 3 + 9);
        assert!(lines[3].text.starts_with("Km from Sun (Sun): "));
        assert_eq!(lines[6].text, "Km from Sun (Earth): 149600000.0");
    }
}

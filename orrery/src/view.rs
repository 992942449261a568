//! Projection from simulation space (meters) to window pixels
//!
//! The reference body sits at the view center. Moons are pushed away from
//! their planet by an extra `sqrt(scale·AU)` factor; at true scale they
//! would be drawn on top of it. That factor is a visual tunable only.

use common::constants::AU;
use glam::{DVec2, Vec2};

use crate::body::Body;
use crate::simulator::Simulator;

/// A point in window pixels, origin top-left, y down
pub type ScreenPosition = Vec2;

/// Zoom level at which bodies are drawn at their nominal radius
const BASE_PIXELS_PER_AU: f64 = 50.0;

/// One frame's mapping from meters to pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    /// Pixels per meter
    pub scale: f64,
    /// Pixel position of the reference body
    pub center: DVec2,
    /// Reference body position, already scaled to pixels
    pub offset: DVec2,
}

impl View {
    pub fn new(width: f64, height: f64, bias: f64, scale: f64, reference: DVec2) -> Self {
        Self {
            scale,
            center: DVec2::new(width / 2.0 + bias, height / 2.0),
            offset: reference * scale,
        }
    }

    /// Zoom relative to one pixel per AU
    pub fn relative_scale(&self) -> f64 {
        self.scale * AU
    }

    /// Extra screen displacement applied to a moon, pixels
    pub fn moon_offset(&self, moon: &Body, parent: &Body) -> DVec2 {
        (moon.position - parent.position) * self.scale * self.relative_scale().sqrt()
    }

    /// Project an absolute point, shifted by `extra` pixels
    pub fn project(&self, point: DVec2, extra: DVec2) -> ScreenPosition {
        (point * self.scale + self.center - self.offset + extra).as_vec2()
    }

    /// Screen-space displacement for `body`: zero unless it is a moon
    pub fn body_offset(&self, body: &Body, sim: &Simulator) -> DVec2 {
        match sim.parent_of(&body.name) {
            Some(parent) if body.is_moon() => self.moon_offset(body, parent),
            _ => DVec2::ZERO,
        }
    }

    /// Where `body` is drawn this frame
    pub fn render_state(&self, body: &Body, sim: &Simulator) -> ScreenPosition {
        self.project(body.position, self.body_offset(body, sim))
    }

    /// Body radius in pixels; grows logarithmically with zoom, never below one pixel
    pub fn display_radius(&self, radius: f32) -> f32 {
        let growth = (self.relative_scale() / BASE_PIXELS_PER_AU).log(5.0) + 0.1;
        (radius as f64 * growth).max(1.0) as f32
    }

    /// How far above its center a body's label is raised, pixels
    pub fn label_lift(&self, radius: f32) -> f32 {
        (radius as f64 * self.relative_scale() / BASE_PIXELS_PER_AU) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::solar_system;
    use approx::assert_relative_eq;

    fn default_view(reference: DVec2) -> View {
        View::new(1200.0, 900.0, 100.0, 50.0 / AU, reference)
    }

    #[test]
    fn reference_body_lands_on_center() {
        let sim = solar_system().build().unwrap();
        let earth = sim.body("Earth").unwrap();
        let view = default_view(earth.position);

        let screen = view.render_state(earth, &sim);
        assert_relative_eq!(screen.x, 700.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 450.0, epsilon = 1e-3);
    }

    #[test]
    fn planets_project_linearly() {
        let sim = solar_system().build().unwrap();
        let view = default_view(DVec2::ZERO);

        let mars = view.render_state(sim.body("Mars").unwrap(), &sim);
        assert_relative_eq!(mars.x, 700.0, epsilon = 1e-3);
        assert_relative_eq!(mars.y, 450.0 + 75.0, epsilon = 1e-3);
    }

    #[test]
    fn moons_are_pushed_away_from_their_planet() {
        let sim = solar_system().build().unwrap();
        let view = default_view(DVec2::ZERO);
        let earth = view.render_state(sim.body("Earth").unwrap(), &sim);
        let moon = view.render_state(sim.body("Moon").unwrap(), &sim);

        // 384 400 km at 50 px/AU is a tenth of a pixel; amplified by sqrt(50)
        let true_gap = 384_400e3 * 50.0 / AU;
        let expected = true_gap + true_gap * 50f64.sqrt();
        assert_relative_eq!((earth.y - moon.y) as f64, expected, epsilon = 1e-3);
    }

    #[test]
    fn moon_separation_grows_with_zoom() {
        let sim = solar_system().build().unwrap();
        let gap = |pixels_per_au: f64| {
            let view = View::new(1200.0, 900.0, 100.0, pixels_per_au / AU, DVec2::ZERO);
            let earth = view.render_state(sim.body("Earth").unwrap(), &sim);
            let moon = view.render_state(sim.body("Moon").unwrap(), &sim);
            earth.distance(moon)
        };
        assert!(gap(500.0) > gap(50.0));
        assert!(gap(50.0) > gap(10.0));
    }

    #[test]
    fn display_radius_tracks_log_zoom() {
        let at_default = default_view(DVec2::ZERO);
        assert_relative_eq!(at_default.display_radius(10.0), 1.0, epsilon = 1e-6);

        let zoomed = View::new(1200.0, 900.0, 100.0, 250.0 / AU, DVec2::ZERO);
        assert_relative_eq!(zoomed.display_radius(10.0), 11.0, epsilon = 1e-4);

        let far = View::new(1200.0, 900.0, 100.0, 5.0 / AU, DVec2::ZERO);
        assert_eq!(far.display_radius(10.0), 1.0);
    }

    #[test]
    fn label_lift_scales_with_zoom() {
        let view = View::new(1200.0, 900.0, 100.0, 100.0 / AU, DVec2::ZERO);
        assert_relative_eq!(view.label_lift(7.0), 14.0, epsilon = 1e-4);
    }
}

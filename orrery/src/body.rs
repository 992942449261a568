//! Point-mass bodies and the pairwise gravity that moves them
//!
//! All state is in SI units (meters, kilograms, seconds) and `f64`: positions
//! span from the Moon's orbit to Neptune's, which `f32` cannot resolve.

use std::collections::VecDeque;

use common::constants::G;
use glam::DVec2;
use serde::Deserialize;

/// Separations below this distance are treated as this distance when
/// computing force magnitude.
pub const MIN_SEPARATION: f64 = 1.0;

/// Role of a body in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// The gravitational center distances are measured against
    Primary,
    /// Orbits the primary directly (or has no parent at all)
    Planet,
    /// Orbits a non-primary body; never records a trail
    Moon,
}

/// Decorative ring drawn around a body
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Ring {
    pub color: [u8; 3],
    /// Pixels between the body's edge and the ring's outer edge
    pub gap: f32,
    /// Ring thickness in pixels
    pub width: f32,
}

/// A body in the simulation with mass, position, and velocity
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub kind: BodyKind,
    pub position: DVec2,
    pub velocity: DVec2,
    pub mass: f64,
    /// Drawing radius in pixels at the default zoom
    pub radius: f32,
    pub color: [u8; 3],
    pub ring: Option<Ring>,
    trail: VecDeque<DVec2>,
    trail_capacity: usize,
    trail_stride: usize,
    distance_to_primary: f64,
}

impl Body {
    pub fn new(
        name: &str,
        kind: BodyKind,
        position: DVec2,
        velocity: DVec2,
        mass: f64,
        radius: f32,
        color: [u8; 3],
    ) -> Self {
        Self {
            name: name.to_string(),
            kind,
            position,
            velocity,
            mass,
            radius,
            color,
            ring: None,
            trail: VecDeque::new(),
            trail_capacity: 0,
            trail_stride: 1,
            distance_to_primary: 0.0,
        }
    }

    /// Keep up to `capacity` past positions, drawing every `stride`-th one
    pub fn with_trail(mut self, capacity: usize, stride: usize) -> Self {
        self.trail_capacity = capacity;
        self.trail_stride = stride.max(1);
        // Grows as positions are recorded, up to `capacity`
        self.trail = VecDeque::new();
        self
    }

    pub fn with_ring(mut self, ring: Option<Ring>) -> Self {
        self.ring = ring;
        self
    }

    pub fn is_primary(&self) -> bool {
        self.kind == BodyKind::Primary
    }

    pub fn is_moon(&self) -> bool {
        self.kind == BodyKind::Moon
    }

    /// Distance to the primary as of the last force computation, in meters
    pub fn distance_to_primary(&self) -> f64 {
        self.distance_to_primary
    }

    /// Past positions, oldest first
    pub fn trail(&self) -> &VecDeque<DVec2> {
        &self.trail
    }

    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }

    pub fn trail_stride(&self) -> usize {
        self.trail_stride
    }

    /// Gravitational force `other` exerts on this body, in newtons.
    ///
    /// The force is decomposed through the angle between the two positions.
    /// Touching `other` when it is the primary refreshes the cached
    /// distance-to-primary. Coincident bodies contribute no force and
    /// separations under [`MIN_SEPARATION`] are floored, so the result is
    /// always finite.
    pub fn compute_attraction(&mut self, other: &Body) -> DVec2 {
        let delta = other.position - self.position;
        let distance = delta.length();
        if other.is_primary() {
            self.distance_to_primary = distance;
        }
        if distance == 0.0 {
            return DVec2::ZERO;
        }

        let angle = delta.y.atan2(delta.x);
        let separation = distance.max(MIN_SEPARATION);
        let force = G * self.mass * other.mass / (separation * separation);
        DVec2::new(force * angle.cos(), force * angle.sin())
    }

    /// Advance one substep against every other body (semi-implicit Euler).
    ///
    /// Velocity is updated first and the new velocity moves the position.
    /// `others` must not contain this body.
    pub fn integrate<'a, I>(&mut self, others: I, dt: f64)
    where
        I: IntoIterator<Item = &'a Body>,
    {
        let mut total_force = DVec2::ZERO;
        for other in others {
            total_force += self.compute_attraction(other);
        }

        self.velocity += total_force / self.mass * dt;
        self.position += self.velocity * dt;

        if !self.is_moon() {
            self.record_trail();
        }
    }

    fn record_trail(&mut self) {
        if self.trail_capacity == 0 {
            return;
        }
        if self.trail.len() == self.trail_capacity {
            self.trail.pop_front();
        }
        self.trail.push_back(self.position);
    }

    /// Trail points worth drawing: every `stride`-th entry plus the latest one.
    ///
    /// Empty for the primary, for moons, and until the trail holds more than
    /// two strides of history.
    pub fn trail_samples(&self) -> Vec<DVec2> {
        if self.is_primary() || self.is_moon() || self.trail.len() <= self.trail_stride * 2 {
            return Vec::new();
        }

        let mut samples: Vec<DVec2> = self.trail.iter().copied().step_by(self.trail_stride).collect();
        if (self.trail.len() - 1) % self.trail_stride != 0 {
            if let Some(latest) = self.trail.back() {
                samples.push(*latest);
            }
        }
        samples
    }
}

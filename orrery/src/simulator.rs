//! The N-body simulator
//!
//! Bodies live in one flat vector in declaration order; that order is also
//! the integration order. Within a substep each body is integrated in turn
//! against the current state of all the others, so bodies later in the order
//! see the already-moved positions of earlier ones. This is a sequential
//! approximation rather than a simultaneous update and is kept as-is:
//! trajectories depend on declaration order.

use std::collections::HashMap;

use crate::body::Body;
use crate::error::SimError;

/// Owns every body and advances them with pairwise gravity
#[derive(Debug, Clone)]
pub struct Simulator {
    bodies: Vec<Body>,
    index: HashMap<String, usize>,
    moons: HashMap<String, String>,
    primary: usize,
    reference_order: Vec<String>,
}

impl Simulator {
    pub(crate) fn from_parts(
        bodies: Vec<Body>,
        index: HashMap<String, usize>,
        moons: HashMap<String, String>,
        primary: usize,
        reference_order: Vec<String>,
    ) -> Self {
        Self {
            bodies,
            index,
            moons,
            primary,
            reference_order,
        }
    }

    /// All bodies in integration order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.index.get(name).map(|&i| &self.bodies[i])
    }

    pub fn primary(&self) -> &Body {
        &self.bodies[self.primary]
    }

    /// Moon name to parent name
    pub fn moons(&self) -> &HashMap<String, String> {
        &self.moons
    }

    /// The body a moon is drawn relative to
    pub fn parent_of(&self, moon: &str) -> Option<&Body> {
        self.moons.get(moon).and_then(|parent| self.body(parent))
    }

    /// Bodies that can center the view: the primary, then planets outward
    pub fn reference_order(&self) -> &[String] {
        &self.reference_order
    }

    /// One integration pass over every body, in order
    pub fn step(&mut self, dt: f64) {
        for i in 0..self.bodies.len() {
            let (before, rest) = self.bodies.split_at_mut(i);
            if let Some((body, after)) = rest.split_first_mut() {
                body.integrate(before.iter().chain(after.iter()), dt);
            }
        }
    }

    /// Run `substeps` sequential passes of `dt` seconds each
    pub fn advance_frame(&mut self, substeps: u32, dt: f64) {
        for _ in 0..substeps {
            self.step(dt);
        }
    }

    /// Cycle `direction` places through the reference order, wrapping at both ends
    pub fn change_reference(&self, current: &str, direction: isize) -> Result<&str, SimError> {
        let position = self
            .reference_order
            .iter()
            .position(|name| name == current)
            .ok_or_else(|| {
                if self.index.contains_key(current) {
                    SimError::NotSelectable(current.to_string())
                } else {
                    SimError::UnknownBody(current.to_string())
                }
            })?;

        let len = self.reference_order.len() as isize;
        let next = (position as isize + direction).rem_euclid(len) as usize;
        Ok(&self.reference_order[next])
    }
}

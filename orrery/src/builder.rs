//! Flat construction of the body set
//!
//! Bodies are described as a list of entries, each optionally naming a parent
//! declared earlier in the list. Offsets and velocities are relative to that
//! parent and are resolved in order, so the result is one flat, name-indexed
//! collection with no nesting left to walk at runtime.

use std::collections::HashMap;

use glam::DVec2;
use serde::Deserialize;

use crate::body::{Body, BodyKind, Ring};
use crate::error::BuildError;
use crate::simulator::Simulator;

/// Longest trail a single body may keep, in recorded positions
pub const MAX_TRAIL_CAPACITY: usize = 10_000_000;

fn default_stride() -> usize {
    1
}

/// One body in a system description
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BodyEntry {
    pub name: String,
    /// Body this one is placed relative to
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub primary: bool,
    /// Position relative to the parent, meters
    #[serde(default)]
    pub offset: DVec2,
    /// Velocity relative to the parent, m/s
    #[serde(default)]
    pub velocity: DVec2,
    pub mass: f64,
    pub radius: f32,
    pub color: [u8; 3],
    #[serde(default)]
    pub trail_capacity: usize,
    #[serde(default = "default_stride")]
    pub trail_stride: usize,
    #[serde(default)]
    pub ring: Option<Ring>,
}

impl BodyEntry {
    /// The body every other distance is measured against
    pub fn primary(name: &str, mass: f64, radius: f32, color: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            primary: true,
            offset: DVec2::ZERO,
            velocity: DVec2::ZERO,
            mass,
            radius,
            color,
            trail_capacity: 0,
            trail_stride: 1,
            ring: None,
        }
    }

    /// A body placed relative to `parent`
    pub fn orbiting(parent: &str, name: &str, mass: f64, radius: f32, color: [u8; 3]) -> Self {
        Self {
            parent: Some(parent.to_string()),
            primary: false,
            ..Self::primary(name, mass, radius, color)
        }
    }

    /// Offset and velocity relative to the parent
    pub fn at(mut self, offset: DVec2, velocity: DVec2) -> Self {
        self.offset = offset;
        self.velocity = velocity;
        self
    }

    pub fn with_trail(mut self, capacity: usize, stride: usize) -> Self {
        self.trail_capacity = capacity;
        self.trail_stride = stride;
        self
    }

    pub fn with_ring(mut self, ring: Ring) -> Self {
        self.ring = Some(ring);
        self
    }
}

/// Collects entries and resolves them into a [`Simulator`]
#[derive(Debug, Clone, Default)]
pub struct SystemBuilder {
    entries: Vec<BodyEntry>,
}

impl SystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, entry: BodyEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn extend(mut self, entries: impl IntoIterator<Item = BodyEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn entries(&self) -> &[BodyEntry] {
        &self.entries
    }

    /// Resolve every entry to absolute coordinates.
    ///
    /// Fails on duplicate names, parents that are missing or declared later,
    /// self-parenting, anything other than exactly one primary, non-positive
    /// masses, zero trail strides, and trails longer than [`MAX_TRAIL_CAPACITY`].
    pub fn build(self) -> Result<Simulator, BuildError> {
        let mut bodies: Vec<Body> = Vec::with_capacity(self.entries.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(self.entries.len());
        let mut moons: HashMap<String, String> = HashMap::new();
        let mut primary: Option<usize> = None;

        for entry in self.entries {
            if index.contains_key(&entry.name) {
                return Err(BuildError::DuplicateName(entry.name));
            }
            if !(entry.mass.is_finite() && entry.mass > 0.0) {
                return Err(BuildError::NonPositiveMass {
                    name: entry.name,
                    mass: entry.mass,
                });
            }
            if entry.trail_stride == 0 {
                return Err(BuildError::ZeroTrailStride(entry.name));
            }
            if entry.trail_capacity > MAX_TRAIL_CAPACITY {
                return Err(BuildError::TrailTooLong {
                    name: entry.name,
                    capacity: entry.trail_capacity,
                    max: MAX_TRAIL_CAPACITY,
                });
            }

            let parent = match &entry.parent {
                Some(parent) if *parent == entry.name => {
                    return Err(BuildError::SelfParent(entry.name));
                }
                Some(parent) => match index.get(parent) {
                    Some(&i) => Some(&bodies[i]),
                    None => {
                        return Err(BuildError::UnknownParent {
                            body: entry.name.clone(),
                            parent: parent.clone(),
                        });
                    }
                },
                None => None,
            };

            let kind = if entry.primary {
                if parent.is_some() {
                    return Err(BuildError::PrimaryHasParent(entry.name));
                }
                if let Some(i) = primary {
                    return Err(BuildError::MultiplePrimaries {
                        first: bodies[i].name.clone(),
                        second: entry.name,
                    });
                }
                BodyKind::Primary
            } else {
                match parent {
                    Some(p) if !p.is_primary() => BodyKind::Moon,
                    _ => BodyKind::Planet,
                }
            };

            let (origin, drift) = parent
                .map(|p| (p.position, p.velocity))
                .unwrap_or((DVec2::ZERO, DVec2::ZERO));

            if kind == BodyKind::Moon {
                if let Some(parent) = &entry.parent {
                    moons.insert(entry.name.clone(), parent.clone());
                }
            }

            let body = Body::new(
                &entry.name,
                kind,
                origin + entry.offset,
                drift + entry.velocity,
                entry.mass,
                entry.radius,
                entry.color,
            )
            .with_trail(entry.trail_capacity, entry.trail_stride)
            .with_ring(entry.ring);

            if kind == BodyKind::Primary {
                primary = Some(bodies.len());
            }
            index.insert(entry.name, bodies.len());
            bodies.push(body);
        }

        let primary = primary.ok_or(BuildError::NoPrimary)?;
        let reference_order = reference_order(&bodies, primary);

        log::debug!(
            "Built {} bodies ({} moons), reference order: {:?}",
            bodies.len(),
            moons.len(),
            reference_order
        );

        Ok(Simulator::from_parts(bodies, index, moons, primary, reference_order))
    }
}

/// Primary first, then every non-moon by initial distance to the primary.
fn reference_order(bodies: &[Body], primary: usize) -> Vec<String> {
    let center = bodies[primary].position;
    let mut others: Vec<(&Body, f64)> = bodies
        .iter()
        .filter(|b| b.kind == BodyKind::Planet)
        .map(|b| (b, b.position.distance(center)))
        .collect();
    others.sort_by(|a, b| a.1.total_cmp(&b.1));

    std::iter::once(bodies[primary].name.clone())
        .chain(others.into_iter().map(|(b, _)| b.name.clone()))
        .collect()
}

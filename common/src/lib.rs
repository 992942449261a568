//! Common utilities for the orrery
//!
//! This crate provides the shared window/GPU setup and the pixel-space camera
//! used by the solar system viewer.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;

/// Physical constants used in simulations
pub mod constants {
    /// Gravitational constant in m³/(kg·s²)
    pub const G: f64 = 6.6743e-11;

    /// Astronomical Unit in meters
    pub const AU: f64 = 1.496e11;

    /// Meters per kilometer
    pub const KM: f64 = 1.0e3;
}

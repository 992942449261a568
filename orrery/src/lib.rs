//! 2D solar system simulation
//!
//! Newtonian N-body gravity over a sun, its planets and a couple of moons,
//! integrated with semi-implicit Euler at a fixed step, several substeps per
//! frame. The library holds the simulation and everything needed to describe
//! a frame; the `orrery` binary puts it on screen with wgpu and egui.

pub mod body;
pub mod builder;
pub mod clock;
pub mod config;
pub mod controls;
pub mod error;
pub mod input;
pub mod scenario;
pub mod scene;
pub mod simulator;
pub mod view;

pub use body::{Body, BodyKind, Ring};
pub use builder::{BodyEntry, SystemBuilder};
pub use config::AppConfig;
pub use controls::{Command, Controls, Flow};
pub use error::{BuildError, ConfigError, SimError};
pub use scene::Scene;
pub use simulator::Simulator;
pub use view::{ScreenPosition, View};

//! Simulation and view parameters the user steers at runtime

use common::constants::AU;

use crate::config::AppConfig;
use crate::error::SimError;
use crate::simulator::Simulator;

/// Shortest simulated time per substep, seconds
pub const MIN_TIME_SCALE: f64 = 225.0;
/// Longest simulated time per substep; beyond this, speed comes from substeps
pub const MAX_TIME_SCALE: f64 = 1800.0;
pub const MAX_SUBSTEPS: u32 = 24;

/// Pixels-per-meter change per zoom tick
pub const ZOOM_STEP: f64 = 1.0 / AU;
/// Zooming out is only allowed while the scale is at least this
pub const ZOOM_OUT_LIMIT: f64 = 5.5 / AU;

/// What the frame loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleLabels,
    ToggleTrails,
    SlowDown,
    SpeedUp,
    PreviousReference,
    NextReference,
    ZoomIn,
    ZoomOut,
    Quit,
}

/// The mutable parameters shared by the simulator and renderer.
///
/// Owned by the frame loop and handed out by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Simulated seconds per substep
    pub time_scale: f64,
    pub substeps: u32,
    /// Pixels per meter
    pub scale: f64,
    /// Name of the body centered on screen
    pub reference: String,
    pub show_labels: bool,
    pub show_trails: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            time_scale: 900.0,
            substeps: 1,
            scale: 50.0 / AU,
            reference: "Sun".to_string(),
            show_labels: true,
            show_trails: true,
        }
    }
}

impl Controls {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            time_scale: config.time_scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE),
            substeps: config.substeps.clamp(1, MAX_SUBSTEPS),
            scale: config.pixels_per_au / AU,
            reference: config.reference.clone(),
            show_labels: config.show_labels,
            show_trails: config.show_trails,
        }
    }

    /// Shed substeps first, then halve the time scale down to its floor
    pub fn slow_down(&mut self) {
        if self.substeps > 1 {
            self.substeps -= 1;
        } else if self.time_scale > MIN_TIME_SCALE {
            self.time_scale = (self.time_scale / 2.0).max(MIN_TIME_SCALE);
        }
        log::info!("Rate: {} s x {} substeps", self.time_scale, self.substeps);
    }

    /// Double the time scale up to its ceiling, then add substeps up to the cap
    pub fn speed_up(&mut self) {
        if self.time_scale >= MAX_TIME_SCALE {
            if self.substeps < MAX_SUBSTEPS {
                self.substeps += 1;
            }
        } else {
            self.time_scale = (self.time_scale * 2.0).min(MAX_TIME_SCALE);
        }
        log::info!("Rate: {} s x {} substeps", self.time_scale, self.substeps);
    }

    pub fn zoom_in(&mut self) {
        self.scale += ZOOM_STEP;
    }

    pub fn zoom_out(&mut self) {
        if self.scale >= ZOOM_OUT_LIMIT {
            self.scale -= ZOOM_STEP;
        } else {
            log::debug!("Zoom-out limit reached at {:.2} px/AU", self.scale * AU);
        }
    }

    /// Move the view center through the simulator's reference order
    pub fn cycle_reference(&mut self, sim: &Simulator, direction: isize) -> Result<(), SimError> {
        let next = sim.change_reference(&self.reference, direction)?;
        log::info!("Reference body: {} -> {}", self.reference, next);
        self.reference = next.to_string();
        Ok(())
    }

    /// Apply one command
    pub fn apply(&mut self, command: Command, sim: &Simulator) -> Result<Flow, SimError> {
        match command {
            Command::ToggleLabels => {
                self.show_labels = !self.show_labels;
                log::info!("Labels {}", if self.show_labels { "on" } else { "off" });
            }
            Command::ToggleTrails => {
                self.show_trails = !self.show_trails;
                log::info!("Trails {}", if self.show_trails { "on" } else { "off" });
            }
            Command::SlowDown => self.slow_down(),
            Command::SpeedUp => self.speed_up(),
            Command::PreviousReference => self.cycle_reference(sim, -1)?,
            Command::NextReference => self.cycle_reference(sim, 1)?,
            Command::ZoomIn => self.zoom_in(),
            Command::ZoomOut => self.zoom_out(),
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

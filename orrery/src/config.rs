//! Startup configuration
//!
//! Every field has a default, so a YAML config file only needs to list what
//! it changes:
//!
//! ```yaml
//! width: 1600
//! height: 1000
//! time_scale: 450
//! pixels_per_au: 80
//! reference: Earth
//! ```
//!
//! A scenario file replaces the built-in solar system with a list of body
//! entries, parents before their moons:
//!
//! ```yaml
//! - name: Sun
//!   primary: true
//!   mass: 1.989e30
//!   radius: 15
//!   color: [253, 184, 19]
//! - name: Earth
//!   parent: Sun
//!   offset: [0.0, 1.496e11]
//!   velocity: [29780.0, 0.0]
//!   mass: 5.972e24
//!   radius: 7
//!   color: [107, 147, 214]
//!   trail_capacity: 17500
//!   trail_stride: 150
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::builder::BodyEntry;
use crate::error::ConfigError;

/// Window, frame-rate and initial-control settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u32,
    /// Initial simulated seconds per substep
    pub time_scale: f64,
    pub substeps: u32,
    /// Initial zoom, in pixels per astronomical unit
    pub pixels_per_au: f64,
    /// Body centered on screen at startup
    pub reference: String,
    /// Horizontal shift of the view center, pixels
    pub view_bias: f64,
    pub show_labels: bool,
    pub show_trails: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Solar System Simulation".to_string(),
            width: 1200,
            height: 900,
            target_fps: 60,
            time_scale: 900.0,
            substeps: 1,
            pixels_per_au: 50.0,
            reference: "Sun".to_string(),
            view_bias: 100.0,
            show_labels: true,
            show_trails: true,
        }
    }
}

impl AppConfig {
    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: Self = read_yaml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation or view cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("time_scale", self.time_scale),
            ("pixels_per_au", self.pixels_per_au),
            ("target_fps", self.target_fps as f64),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        if !self.view_bias.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "view_bias",
                value: self.view_bias,
            });
        }
        Ok(())
    }
}

/// Load a list of body entries
pub fn load_scenario(path: &Path) -> Result<Vec<BodyEntry>, ConfigError> {
    read_yaml(path)
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("width: 1600\nreference: Earth\n").unwrap();
        assert_eq!(config.width, 1600);
        assert_eq!(config.reference, "Earth");
        assert_eq!(config.height, 900);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn scenario_entries_parse() {
        let yaml = r#"
- name: Sun
  primary: true
  mass: 1.989e30
  radius: 15
  color: [253, 184, 19]
- name: Saturn
  parent: Sun
  offset: [0.0, 1.4212e12]
  velocity: [9672.5, 0.0]
  mass: 5.683e26
  radius: 13
  color: [234, 214, 184]
  trail_capacity: 600000
  trail_stride: 2000
  ring: { color: [206, 184, 184], gap: 6, width: 4 }
"#;
        let entries: Vec<BodyEntry> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].primary);
        assert_eq!(entries[0].trail_stride, 1);
        assert_eq!(entries[1].parent.as_deref(), Some("Sun"));
        assert_eq!(entries[1].offset, DVec2::new(0.0, 1.4212e12));
        assert_eq!(entries[1].ring.map(|r| r.width), Some(4.0));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn nan_time_scale_and_negative_zoom_are_rejected() {
        let config: AppConfig = serde_yaml::from_str("time_scale: .nan\npixels_per_au: -50\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "time_scale", .. }));

        let config: AppConfig = serde_yaml::from_str("pixels_per_au: -50\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "pixels_per_au", value } if value == -50.0
        ));

        let config: AppConfig = serde_yaml::from_str("pixels_per_au: 0\n").unwrap();
        assert!(config.validate().is_err());

        let config: AppConfig = serde_yaml::from_str("target_fps: 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_rejects_invalid_values() {
        let path = std::env::temp_dir().join(format!("orrery-invalid-{}.yaml", std::process::id()));
        fs::write(&path, "time_scale: .inf\n").unwrap();
        let result = AppConfig::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "time_scale", .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}

//! Error types for building and driving the simulation

use std::path::PathBuf;
use thiserror::Error;

/// Faults in the body description, reported before the simulation starts
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("body name `{0}` is used more than once")]
    DuplicateName(String),
    #[error("body `{body}` refers to parent `{parent}`, which is not declared before it")]
    UnknownParent { body: String, parent: String },
    #[error("body `{0}` is its own parent")]
    SelfParent(String),
    #[error("no primary body was declared")]
    NoPrimary,
    #[error("both `{first}` and `{second}` are marked as primary")]
    MultiplePrimaries { first: String, second: String },
    #[error("primary body `{0}` cannot have a parent")]
    PrimaryHasParent(String),
    #[error("body `{name}` has mass {mass}, expected a positive finite value")]
    NonPositiveMass { name: String, mass: f64 },
    #[error("body `{0}` has a trail sample stride of zero")]
    ZeroTrailStride(String),
    #[error("body `{name}` asks for a trail of {capacity} points, the limit is {max}")]
    TrailTooLong {
        name: String,
        capacity: usize,
        max: usize,
    },
}

/// Lookups against the running simulation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("no body named `{0}`")]
    UnknownBody(String),
    #[error("`{0}` is not a selectable reference body")]
    NotSelectable(String),
}

/// Failures loading configuration or scenario files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("`{field}` is {value}, expected a positive finite number")]
    InvalidValue { field: &'static str, value: f64 },
}

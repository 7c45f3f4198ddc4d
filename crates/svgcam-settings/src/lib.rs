//! svgcam Settings Crate
//!
//! Handles conversion configuration: typed sections, defaults, file
//! persistence, and validation.

pub mod config;

pub use config::{
    BedSettings, Config, ExtruderSettings, MachineSettings, MaterialSettings, PartialConfig,
    PathSettings,
};

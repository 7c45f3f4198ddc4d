//! Configuration and settings management for svgcam
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Bed settings (the physical work envelope)
//! - Path settings (curve flattening)
//! - Material settings (3D print temperatures, filament)
//! - Extruder settings (nozzle, layer, flow)
//! - Machine settings (clearance, feed rate)
//!
//! The configuration is constructed once before a conversion runs and is
//! never mutated afterwards; components receive it by shared reference.

use serde::{Deserialize, Serialize};
use std::path::Path;
use svgcam_core::{ConfigError, Error, Result};

/// Physical work envelope of the machine, in machine units (mm).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BedSettings {
    /// Usable bed width
    pub width: f64,
    /// Usable bed height
    pub height: f64,
}

impl Default for BedSettings {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
        }
    }
}

/// Curve flattening settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathSettings {
    /// Flattening tolerance in drawing units; smaller values produce more
    /// segments per curve.
    pub smoothness: f64,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self { smoothness: 0.02 }
    }
}

/// 3D print material settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaterialSettings {
    /// Heated bed target in degrees C (M190)
    pub bed_temperature: u32,
    /// Extruder 0 target in degrees C (M109)
    pub e0_temperature: u32,
    /// Part fan PWM value, 0-255 (M106)
    pub fan: u32,
    /// Filament diameter in mm
    pub filament_diameter: f64,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            bed_temperature: 60,
            e0_temperature: 205,
            fan: 255,
            filament_diameter: 1.75,
        }
    }
}

/// Extruder geometry settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExtruderSettings {
    /// Nozzle orifice diameter in mm
    pub nozzle_diameter: f64,
    /// Layer height in mm
    pub layer_height: f64,
    /// Extrusion flow multiplier (1.0 = nominal)
    pub flow_multiplier: f64,
}

impl Default for ExtruderSettings {
    fn default() -> Self {
        Self {
            nozzle_diameter: 0.4,
            layer_height: 0.2,
            flow_multiplier: 1.0,
        }
    }
}

/// Machine motion settings shared by both profiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MachineSettings {
    /// Z height for travel moves, in mm above the bed
    pub z_clearance: f64,
    /// Feed rate in mm/min
    pub feed_rate: f64,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            z_clearance: 5.0,
            feed_rate: 3600.0,
        }
    }
}

/// Complete conversion configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct Config {
    /// Work envelope
    #[serde(default)]
    pub bed: BedSettings,
    /// Curve flattening
    #[serde(default)]
    pub path: PathSettings,
    /// 3D print material
    #[serde(default)]
    pub material: MaterialSettings,
    /// Extruder geometry
    #[serde(default)]
    pub extruder: ExtruderSettings,
    /// Machine motion
    #[serde(default)]
    pub machine: MachineSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::from(ConfigError::Unreadable {
                reason: e.to_string(),
            })
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| {
                Error::from(ConfigError::Malformed {
                    reason: e.to_string(),
                })
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|e| {
                Error::from(ConfigError::Malformed {
                    reason: e.to_string(),
                })
            })?
        } else {
            return Err(ConfigError::UnsupportedFormat.into());
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self).map_err(|e| {
                Error::from(ConfigError::Malformed {
                    reason: e.to_string(),
                })
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self).map_err(|e| {
                Error::from(ConfigError::Malformed {
                    reason: e.to_string(),
                })
            })?
        } else {
            return Err(ConfigError::UnsupportedFormat.into());
        };

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// Any violation here is fatal to a conversion: the pipeline refuses
    /// to start without a valid envelope and positive machine parameters.
    pub fn validate(&self) -> Result<()> {
        fn positive(setting: &str, value: f64) -> Result<()> {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    setting: setting.to_string(),
                    reason: format!("must be a positive number, got {}", value),
                }
                .into());
            }
            Ok(())
        }

        positive("bed.width", self.bed.width)?;
        positive("bed.height", self.bed.height)?;
        positive("path.smoothness", self.path.smoothness)?;
        positive("material.filament_diameter", self.material.filament_diameter)?;
        positive("extruder.nozzle_diameter", self.extruder.nozzle_diameter)?;
        positive("extruder.layer_height", self.extruder.layer_height)?;
        positive("extruder.flow_multiplier", self.extruder.flow_multiplier)?;
        positive("machine.feed_rate", self.machine.feed_rate)?;

        if self.material.fan > 255 {
            return Err(ConfigError::InvalidValue {
                setting: "material.fan".to_string(),
                reason: format!("must be 0-255, got {}", self.material.fan),
            }
            .into());
        }

        if !self.machine.z_clearance.is_finite() || self.machine.z_clearance < 0.0 {
            return Err(ConfigError::InvalidValue {
                setting: "machine.z_clearance".to_string(),
                reason: format!("must be >= 0, got {}", self.machine.z_clearance),
            }
            .into());
        }

        Ok(())
    }

    /// Load an override file and merge it over this config
    ///
    /// The override file replaces every section it specifies; sections it
    /// omits keep their current values. The merged result is validated.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::from(ConfigError::Unreadable {
                reason: e.to_string(),
            })
        })?;

        let overrides: PartialConfig = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| {
                Error::from(ConfigError::Malformed {
                    reason: e.to_string(),
                })
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|e| {
                Error::from(ConfigError::Malformed {
                    reason: e.to_string(),
                })
            })?
        } else {
            return Err(ConfigError::UnsupportedFormat.into());
        };

        self.merge(overrides);
        self.validate()
    }

    /// Merge partial overrides into this config, section-wise
    pub fn merge(&mut self, other: PartialConfig) {
        if let Some(bed) = other.bed {
            self.bed = bed;
        }
        if let Some(path) = other.path {
            self.path = path;
        }
        if let Some(material) = other.material {
            self.material = material;
        }
        if let Some(extruder) = other.extruder {
            self.extruder = extruder;
        }
        if let Some(machine) = other.machine {
            self.machine = machine;
        }
    }
}

/// A config override file: every section optional.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct PartialConfig {
    pub bed: Option<BedSettings>,
    pub path: Option<PathSettings>,
    pub material: Option<MaterialSettings>,
    pub extruder: Option<ExtruderSettings>,
    pub machine: Option<MachineSettings>,
}

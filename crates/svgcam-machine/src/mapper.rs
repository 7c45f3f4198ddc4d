//! Drawing-space to machine-space coordinate mapping.
//!
//! Drawing space has its origin top-left with Y increasing downward (the
//! SVG convention); machine space has its origin bottom-left with Y
//! increasing upward. Mapping scales uniformly and flips Y against the
//! envelope height.

use svgcam_core::{ConfigError, Point, Result};
use svgcam_settings::Config;

/// The physical reachable work area of the machine, in machine units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkEnvelope {
    pub width: f64,
    pub height: f64,
}

impl WorkEnvelope {
    /// Build an envelope; both dimensions must be finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        for (name, value) in [("bed.width", width), ("bed.height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    setting: name.to_string(),
                    reason: format!("must be a positive number, got {}", value),
                }
                .into());
            }
        }
        Ok(Self { width, height })
    }

    /// Envelope from the configured bed dimensions.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.bed.width, config.bed.height)
    }

    /// True iff the point lies inside the physical work area (inclusive
    /// on all edges).
    pub fn contains(&self, p: MachinePoint) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// A point in machine space: post-scale, post-flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachinePoint {
    pub x: f64,
    pub y: f64,
}

impl MachinePoint {
    pub const ORIGIN: MachinePoint = MachinePoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &MachinePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Derive the run-wide scale factor.
///
/// Uniform scaling preserves the aspect ratio; the clamp to 1.0 means a
/// drawing is never magnified past its native size. The result always
/// satisfies `0 < scale <= 1`.
pub fn scale_for(drawing_width: f64, drawing_height: f64, envelope: &WorkEnvelope) -> Result<f64> {
    if !drawing_width.is_finite()
        || !drawing_height.is_finite()
        || drawing_width <= 0.0
        || drawing_height <= 0.0
    {
        return Err(ConfigError::InvalidValue {
            setting: "drawing dimensions".to_string(),
            reason: format!(
                "must be positive numbers, got {} x {}",
                drawing_width, drawing_height
            ),
        }
        .into());
    }

    let scale_x = envelope.width / drawing_width;
    let scale_y = envelope.height / drawing_height;
    Ok(scale_x.min(scale_y).min(1.0))
}

/// Map a drawing-space point into machine space.
pub fn map(p: Point, scale: f64, envelope: &WorkEnvelope) -> MachinePoint {
    MachinePoint {
        x: scale * p.x,
        y: envelope.height - scale * p.y,
    }
}

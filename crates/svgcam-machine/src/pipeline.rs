//! The conversion pipeline: one deterministic pass over a parsed drawing.

use tracing::{debug, info};

use svgcam_core::Result;
use svgcam_import::{point_generator, SvgDrawing};
use svgcam_settings::Config;

use crate::emitter::ShapeEmitter;
use crate::mapper::{self, WorkEnvelope};
use crate::profile::MachineProfile;

/// Drives a whole conversion: preamble, every shape in document order,
/// postamble. The profile is chosen once at construction and used for
/// every emitted command.
pub struct Pipeline {
    profile: Box<dyn MachineProfile>,
    config: Config,
    envelope: WorkEnvelope,
}

impl Pipeline {
    /// Build a pipeline; fails on an invalid configuration before any
    /// output can be produced.
    pub fn new(profile: Box<dyn MachineProfile>, config: Config) -> Result<Self> {
        config.validate()?;
        let envelope = WorkEnvelope::from_config(&config)?;
        Ok(Self {
            profile,
            config,
            envelope,
        })
    }

    /// Convert a drawing into a single G-code stream.
    pub fn generate(&self, drawing: &SvgDrawing) -> Result<String> {
        let scale = mapper::scale_for(drawing.width, drawing.height, &self.envelope)?;
        info!(
            width = drawing.width,
            height = drawing.height,
            scale,
            profile = self.profile.name(),
            "starting conversion"
        );

        let mut gcode = String::new();
        gcode.push_str(&format!(
            "; svgcam {} profile\n; drawing {} x {}, scale {:.4}\n",
            self.profile.name(),
            drawing.width,
            drawing.height,
            scale
        ));
        gcode.push_str(&self.profile.preamble(&self.config));

        let emitter = ShapeEmitter::new(self.profile.as_ref(), &self.config, self.envelope);

        for element in &drawing.elements {
            let points = point_generator(
                &element.path,
                element.transform.as_ref(),
                self.config.path.smoothness,
            );
            if points.is_empty() {
                // No geometry at all: skipped outright, no bracketing
                debug!(kind = ?element.kind, "element yielded no points, skipping");
                continue;
            }

            debug!(kind = ?element.kind, points = points.len(), "emitting shape");
            emitter.emit_shape(
                points
                    .into_iter()
                    .map(|p| mapper::map(p, scale, &self.envelope)),
                &mut gcode,
            );
        }

        gcode.push_str(&self.profile.postamble(&self.config));
        Ok(gcode)
    }
}

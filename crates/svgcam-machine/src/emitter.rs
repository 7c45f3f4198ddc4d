//! Per-shape emission: the travel/print state machine.
//!
//! A shape starts idle at the machine origin. The first in-bounds point
//! produces a travel move; every in-bounds point after it produces a print
//! move. Out-of-bounds points emit nothing but still advance the previous
//! point, so a later in-bounds point moves relative to where the path
//! actually went rather than the last emitted location.

use tracing::debug;

use svgcam_settings::Config;

use crate::mapper::{MachinePoint, WorkEnvelope};
use crate::profile::MachineProfile;

/// Transient per-shape state; created at shape start, dropped at shape
/// end.
struct ShapeRun {
    last: MachinePoint,
    is_new_shape: bool,
}

impl ShapeRun {
    fn new() -> Self {
        Self {
            last: MachinePoint::ORIGIN,
            is_new_shape: true,
        }
    }
}

/// Emits the command stream for one shape at a time.
pub struct ShapeEmitter<'a> {
    profile: &'a dyn MachineProfile,
    config: &'a Config,
    envelope: WorkEnvelope,
}

impl<'a> ShapeEmitter<'a> {
    pub fn new(profile: &'a dyn MachineProfile, config: &'a Config, envelope: WorkEnvelope) -> Self {
        Self {
            profile,
            config,
            envelope,
        }
    }

    /// Run one shape's mapped points through the state machine, appending
    /// every emitted fragment to `out`.
    ///
    /// The bracketing pair is unconditional: a shape whose every point is
    /// out of bounds still produces its shape preamble and postamble.
    pub fn emit_shape<I>(&self, points: I, out: &mut String)
    where
        I: IntoIterator<Item = MachinePoint>,
    {
        out.push_str(&self.profile.shape_preamble(self.config));

        let mut run = ShapeRun::new();
        for p in points {
            if self.envelope.contains(p) {
                if run.is_new_shape {
                    out.push_str(&self.profile.travel(self.config, run.last, p));
                    run.is_new_shape = false;
                } else {
                    out.push_str(&self.profile.print(self.config, run.last, p));
                }
            } else {
                debug!(x = p.x, y = p.y, "point outside work envelope, not emitted");
            }
            run.last = p;
        }

        out.push_str(&self.profile.shape_postamble(self.config));
    }
}

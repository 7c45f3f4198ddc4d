//! Machine profiles: the polymorphic command-emission contract.
//!
//! A profile turns mapped machine-space coordinates into the text of one
//! motion or state command. Profiles are stateless; every method takes the
//! run-wide configuration and is total over valid configurations. One
//! profile is selected at pipeline construction and used for the whole
//! run.

use svgcam_settings::Config;

use crate::mapper::MachinePoint;

/// Command emission contract shared by both machine kinds.
///
/// `travel` and `print` receive the previous and target machine-space
/// points; everything else is bracketing around the run or one shape.
pub trait MachineProfile {
    /// Human-readable profile name, used in the stream header.
    fn name(&self) -> &'static str;

    /// Run-start commands.
    fn preamble(&self, config: &Config) -> String;

    /// Run-end commands.
    fn postamble(&self, config: &Config) -> String;

    /// Emitted before each shape.
    fn shape_preamble(&self, config: &Config) -> String;

    /// Emitted after each shape.
    fn shape_postamble(&self, config: &Config) -> String;

    /// Non-depositing repositioning move.
    fn travel(&self, config: &Config, from: MachinePoint, to: MachinePoint) -> String;

    /// Depositing (cutting/extruding) move.
    fn print(&self, config: &Config, from: MachinePoint, to: MachinePoint) -> String;
}

/// Positional tool profile: CNC router, spindle or laser head.
///
/// The tool is armed (M03) at the end of each travel move, so print moves
/// are plain linear moves; each shape ends with the tool switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterProfile;

impl MachineProfile for RouterProfile {
    fn name(&self) -> &'static str {
        "router"
    }

    fn preamble(&self, _config: &Config) -> String {
        // Home, head down to the work surface, tool off
        "G28\nG1 Z0.00\nM05\n".to_string()
    }

    fn postamble(&self, _config: &Config) -> String {
        "G28\n".to_string()
    }

    fn shape_preamble(&self, _config: &Config) -> String {
        "G4 P0.20\n".to_string()
    }

    fn shape_postamble(&self, _config: &Config) -> String {
        "G4 P0.20\nM05\n".to_string()
    }

    fn travel(&self, _config: &Config, _from: MachinePoint, to: MachinePoint) -> String {
        format!("G0 X{:.2} Y{:.2}\nM03\n", to.x, to.y)
    }

    fn print(&self, _config: &Config, _from: MachinePoint, to: MachinePoint) -> String {
        format!("G1 X{:.2} Y{:.2}\n", to.x, to.y)
    }
}

/// Extrusion tool profile: FDM 3D printer.
///
/// Travel moves happen at the configured clearance height so the nozzle
/// never drags across the part; print moves carry a per-move extrusion
/// amount derived from the deposited volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrinterProfile;

impl PrinterProfile {
    /// Extrusion amount for one move of the given length, in mm of
    /// filament: deposited volume divided by the filament cross-section.
    fn extrusion_for(config: &Config, length: f64) -> f64 {
        let volume = config.extruder.nozzle_diameter
            * config.extruder.layer_height
            * length
            * config.extruder.flow_multiplier;
        let filament_radius = config.material.filament_diameter / 2.0;
        volume / (std::f64::consts::PI * filament_radius * filament_radius)
    }
}

impl MachineProfile for PrinterProfile {
    fn name(&self) -> &'static str {
        "printer"
    }

    fn preamble(&self, config: &Config) -> String {
        let mut gcode = String::new();
        // Home
        gcode.push_str("G28\n");
        // Heat bed, then extruder, both blocking
        gcode.push_str(&format!("M190 S{}\n", config.material.bed_temperature));
        gcode.push_str(&format!("M109 S{}\n", config.material.e0_temperature));
        // Part fan
        gcode.push_str(&format!("M106 S{}\n", config.material.fan));
        // Lift to clearance and set the feed rate
        gcode.push_str(&format!("G0 Z{:.2}\n", config.machine.z_clearance));
        gcode.push_str(&format!("G1 F{:.0}\n", config.machine.feed_rate));
        gcode
    }

    fn postamble(&self, _config: &Config) -> String {
        "G28\n".to_string()
    }

    fn shape_preamble(&self, _config: &Config) -> String {
        String::new()
    }

    fn shape_postamble(&self, _config: &Config) -> String {
        String::new()
    }

    fn travel(&self, config: &Config, _from: MachinePoint, to: MachinePoint) -> String {
        let mut gcode = String::new();
        gcode.push_str(&format!("G0 Z{:.2}\n", config.machine.z_clearance));
        gcode.push_str(&format!("G0 X{:.2} Y{:.2}\n", to.x, to.y));
        gcode.push_str(&format!("G0 Z{:.2}\n", config.extruder.layer_height));
        gcode
    }

    fn print(&self, config: &Config, from: MachinePoint, to: MachinePoint) -> String {
        let e = Self::extrusion_for(config, from.distance_to(&to));
        format!("G1 X{:.2} Y{:.2} E{:.2}\n", to.x, to.y, e)
    }
}

//! # svgcam
//!
//! Converts SVG vector drawings to G-code for CNC routers, laser cutters,
//! and extrusion 3D printers.
//!
//! ## Architecture
//!
//! svgcam is organized as a workspace with multiple crates:
//!
//! 1. **svgcam-core** - Shared geometry types and error handling
//! 2. **svgcam-settings** - Typed configuration with file persistence
//! 3. **svgcam-import** - SVG parsing and lyon-based path flattening
//! 4. **svgcam-machine** - Coordinate mapping, machine profiles, and the
//!    emission pipeline
//! 5. **svgcam** - The command-line binary
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svgcam::{Config, Pipeline, RouterProfile, SvgDrawing};
//!
//! let drawing = SvgDrawing::parse(svg_text)?;
//! let pipeline = Pipeline::new(Box::new(RouterProfile), Config::default())?;
//! let gcode = pipeline.generate(&drawing)?;
//! ```

pub use svgcam_core::{ConfigError, Error, Point, Result, SvgError};
pub use svgcam_import::{point_generator, ElementKind, SvgDrawing, SvgElement};
pub use svgcam_machine::{
    scale_for, MachinePoint, MachineProfile, Pipeline, PrinterProfile, RouterProfile, ShapeEmitter,
    WorkEnvelope,
};
pub use svgcam_settings::{
    BedSettings, Config, ExtruderSettings, MachineSettings, MaterialSettings, PartialConfig,
    PathSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output on stderr, `RUST_LOG`
/// environment variable support, and the given default level.
pub fn init_logging(default_level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(default_level.into());

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

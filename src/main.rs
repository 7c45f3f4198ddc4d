use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use svgcam::{init_logging, Config, MachineProfile, Pipeline, PrinterProfile, RouterProfile, SvgDrawing};

/// Converts SVG files to G-code.
#[derive(Parser, Debug)]
#[command(name = "svgcam", version, max_term_width = 80)]
struct Args {
    /// Input .svg file.
    input: PathBuf,

    /// Output .gcode file.
    ///
    /// If omitted, the output is written to a `gcode/` directory beside
    /// the input file, named after the input.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (.toml or .json) merged over the built-in defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate G-code for an extrusion 3D printer instead of a
    /// router/laser.
    #[arg(long)]
    printer: bool,

    /// Enable debug output.
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    init_logging(level)?;

    if !args.input.is_file() {
        anyhow::bail!("File \"{}\" not found", args.input.display());
    }
    if !args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    {
        anyhow::bail!("File \"{}\" is not an SVG file", args.input.display());
    }

    let mut config = Config::default();
    if let Some(config_path) = &args.config {
        config
            .merge_from_file(config_path)
            .with_context(|| format!("Failed to load config \"{}\"", config_path.display()))?;
    }
    config.validate()?;

    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read \"{}\"", args.input.display()))?;
    let drawing = SvgDrawing::parse(&content)
        .with_context(|| format!("Failed to parse \"{}\"", args.input.display()))?;

    let profile: Box<dyn MachineProfile> = if args.printer {
        Box::new(PrinterProfile)
    } else {
        Box::new(RouterProfile)
    };

    let pipeline = Pipeline::new(profile, config)?;
    let gcode = pipeline.generate(&drawing)?;

    let output = match args.output {
        Some(path) => path,
        None => default_output_path(&args.input),
    };
    if let Some(dir) = output.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create \"{}\"", dir.display()))?;
        }
    }
    std::fs::write(&output, &gcode)
        .with_context(|| format!("Failed to write \"{}\"", output.display()))?;

    info!(output = %output.display(), "wrote G-code");
    Ok(())
}

/// `gcode/<stem>.gcode` beside the input file.
fn default_output_path(input: &Path) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".gcode");
    dir.join("gcode").join(name)
}

use svgcam_import::SvgDrawing;
use svgcam_machine::mapper::MachinePoint;
use svgcam_machine::profile::{MachineProfile, PrinterProfile, RouterProfile};
use svgcam_machine::Pipeline;
use svgcam_settings::Config;

fn extrusion_of(fragment: &str) -> f64 {
    fragment
        .split('E')
        .nth(1)
        .and_then(|s| s.trim().parse().ok())
        .expect("print fragment should carry an E word")
}

#[test]
fn test_extrusion_grows_with_move_length() {
    let config = Config::default();
    let profile = PrinterProfile;
    let origin = MachinePoint::new(0.0, 0.0);

    let e0 = extrusion_of(&profile.print(&config, origin, origin));
    let e10 = extrusion_of(&profile.print(&config, origin, MachinePoint::new(10.0, 0.0)));
    let e20 = extrusion_of(&profile.print(&config, origin, MachinePoint::new(20.0, 0.0)));
    let e40 = extrusion_of(&profile.print(&config, origin, MachinePoint::new(0.0, 40.0)));

    assert_eq!(e0, 0.0);
    assert!(e0 < e10 && e10 < e20 && e20 < e40);
}

#[test]
fn test_extrusion_matches_volume_formula() {
    let config = Config::default();
    let length = 50.0;
    let volume = config.extruder.nozzle_diameter
        * config.extruder.layer_height
        * length
        * config.extruder.flow_multiplier;
    let radius = config.material.filament_diameter / 2.0;
    let expected = volume / (std::f64::consts::PI * radius * radius);

    let fragment = PrinterProfile.print(
        &config,
        MachinePoint::new(0.0, 0.0),
        MachinePoint::new(length, 0.0),
    );
    assert!((extrusion_of(&fragment) - expected).abs() < 0.005);
}

#[test]
fn test_circle_drawing_clamps_scale_and_orders_commands() {
    // 100x100 drawing in a 200x200 envelope: scale clamps to 1.0
    let svg = r#"<svg width="100" height="100"><circle cx="50" cy="50" r="40"/></svg>"#;
    let drawing = SvgDrawing::parse(svg).unwrap();

    let pipeline = Pipeline::new(Box::new(RouterProfile), Config::default()).unwrap();
    let gcode = pipeline.generate(&drawing).unwrap();

    assert!(gcode.contains("scale 1.0000"));

    // First motion command after the shape preamble is a travel
    let lines: Vec<&str> = gcode.lines().collect();
    let dwell = lines
        .iter()
        .position(|l| *l == "G4 P0.20")
        .expect("shape preamble missing");
    assert!(lines[dwell + 1].starts_with("G0 X"));
    assert_eq!(lines[dwell + 2], "M03");

    // Last fragments before the run postamble are the shape postamble
    assert!(gcode.ends_with("G4 P0.20\nM05\nG28\n"));
}

#[test]
fn test_pipeline_rejects_invalid_config() {
    let mut config = Config::default();
    config.bed.width = 0.0;
    assert!(Pipeline::new(Box::new(RouterProfile), config).is_err());
}

#[test]
fn test_empty_elements_are_skipped_without_bracketing() {
    // The group is not drawable and the rect is degenerate; nothing but
    // run preamble/postamble should be emitted.
    let svg = r#"<svg width="100" height="100"><g id="layer"><rect x="0" y="0" width="0" height="10"/></g></svg>"#;
    let drawing = SvgDrawing::parse(svg).unwrap();

    let pipeline = Pipeline::new(Box::new(RouterProfile), Config::default()).unwrap();
    let gcode = pipeline.generate(&drawing).unwrap();

    assert!(!gcode.contains("G4 P0.20"));
    assert!(!gcode.contains("M03"));
}

#[test]
fn test_unrecognized_tags_do_not_perturb_sibling_shapes() {
    let plain = r#"<svg width="100" height="100"><line x1="0" y1="0" x2="10" y2="0"/><line x1="20" y1="0" x2="30" y2="0"/></svg>"#;
    let grouped = r#"<svg width="100" height="100"><line x1="0" y1="0" x2="10" y2="0"/><g id="noise"/><line x1="20" y1="0" x2="30" y2="0"/></svg>"#;

    let pipeline = Pipeline::new(Box::new(RouterProfile), Config::default()).unwrap();
    let a = pipeline
        .generate(&SvgDrawing::parse(plain).unwrap())
        .unwrap();
    let b = pipeline
        .generate(&SvgDrawing::parse(grouped).unwrap())
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_out_of_envelope_drawing_portion_is_dropped() {
    // A line running off a small bed: only the in-bounds prefix prints.
    let svg = r#"<svg width="10" height="10"><line x1="0" y1="10" x2="30" y2="10"/></svg>"#;
    let mut config = Config::default();
    config.bed.width = 10.0;
    config.bed.height = 10.0;

    let pipeline = Pipeline::new(Box::new(RouterProfile), config).unwrap();
    let gcode = pipeline.generate(&SvgDrawing::parse(svg).unwrap()).unwrap();

    // Both endpoints map to y=0; the second (x=30) is off the bed.
    assert!(gcode.contains("G0 X0.00 Y0.00"));
    assert!(!gcode.contains("X30.00"));
}

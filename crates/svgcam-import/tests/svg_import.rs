use svgcam_import::{point_generator, ElementKind, SvgDrawing};

#[test]
fn test_dimensions_from_attributes() {
    let drawing = SvgDrawing::parse(r#"<svg width="100" height="50"></svg>"#).unwrap();
    assert_eq!(drawing.width, 100.0);
    assert_eq!(drawing.height, 50.0);
}

#[test]
fn test_dimensions_tolerate_unit_suffix() {
    let drawing = SvgDrawing::parse(r#"<svg width="100mm" height="12.5cm"></svg>"#).unwrap();
    assert_eq!(drawing.width, 100.0);
    assert_eq!(drawing.height, 12.5);
}

#[test]
fn test_dimensions_fall_back_to_viewbox() {
    let drawing = SvgDrawing::parse(r#"<svg viewBox="0 0 120 80"></svg>"#).unwrap();
    assert_eq!(drawing.width, 120.0);
    assert_eq!(drawing.height, 80.0);
}

#[test]
fn test_missing_dimensions_is_fatal() {
    let err = SvgDrawing::parse("<svg></svg>").unwrap_err();
    assert!(err.is_svg_error());
}

#[test]
fn test_non_svg_content_is_rejected() {
    assert!(SvgDrawing::parse("just some text").is_err());
    assert!(SvgDrawing::parse("<html><body/></html>").is_err());
}

#[test]
fn test_elements_keep_document_order() {
    let svg = r#"<svg width="100" height="100">
        <circle cx="10" cy="10" r="5"/>
        <g id="layer1">
            <rect x="0" y="0" width="10" height="10"/>
        </g>
        <line x1="0" y1="0" x2="5" y2="5"/>
        <path d="M0 0 L1 1"/>
    </svg>"#;

    let drawing = SvgDrawing::parse(svg).unwrap();
    let kinds: Vec<ElementKind> = drawing.elements.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        [
            ElementKind::Circle,
            ElementKind::Rect,
            ElementKind::Line,
            ElementKind::Path,
        ]
    );
}

#[test]
fn test_container_tags_are_not_elements() {
    let svg = r#"<svg width="100" height="100">
        <defs><metadata>x</metadata></defs>
        <g transform="matrix(1,0,0,1,0,0)"></g>
    </svg>"#;
    let drawing = SvgDrawing::parse(svg).unwrap();
    assert!(drawing.elements.is_empty());
}

#[test]
fn test_degenerate_geometry_is_dropped() {
    let svg = r#"<svg width="100" height="100">
        <rect x="0" y="0" width="0" height="10"/>
        <circle cx="5" cy="5" r="0"/>
        <polyline points="3,4"/>
        <circle cx="5" cy="5" r="2"/>
    </svg>"#;
    let drawing = SvgDrawing::parse(svg).unwrap();
    assert_eq!(drawing.elements.len(), 1);
    assert_eq!(drawing.elements[0].kind, ElementKind::Circle);
}

#[test]
fn test_rect_outline_is_closed() {
    let svg = r#"<svg width="100" height="100"><rect x="10" y="20" width="30" height="40"/></svg>"#;
    let drawing = SvgDrawing::parse(svg).unwrap();
    let points = point_generator(&drawing.elements[0].path, None, 0.1);

    // Four corners plus the closing return to the start
    assert_eq!(points.len(), 5);
    assert_eq!((points[0].x, points[0].y), (10.0, 20.0));
    assert_eq!((points[4].x, points[4].y), (10.0, 20.0));
}

#[test]
fn test_polygon_closes_and_polyline_does_not() {
    let svg = r#"<svg width="100" height="100">
        <polygon points="0,0 10,0 10,10"/>
        <polyline points="0,0 10,0 10,10"/>
    </svg>"#;
    let drawing = SvgDrawing::parse(svg).unwrap();

    let polygon = point_generator(&drawing.elements[0].path, None, 0.1);
    let polyline = point_generator(&drawing.elements[1].path, None, 0.1);

    assert_eq!(polygon.len(), 4);
    assert_eq!((polygon[3].x, polygon[3].y), (0.0, 0.0));
    assert_eq!(polyline.len(), 3);
}

#[test]
fn test_matrix_transform_is_parsed_and_applied() {
    let svg = r#"<svg width="100" height="100">
        <line x1="0" y1="0" x2="10" y2="0" transform="matrix(1 0 0 1 10 20)"/>
    </svg>"#;
    let drawing = SvgDrawing::parse(svg).unwrap();
    let element = &drawing.elements[0];
    assert!(element.transform.is_some());

    let points = point_generator(&element.path, element.transform.as_ref(), 0.1);
    assert_eq!((points[0].x, points[0].y), (10.0, 20.0));
    assert_eq!((points[1].x, points[1].y), (20.0, 20.0));
}

#[test]
fn test_namespaced_tags_resolve_to_local_names() {
    let svg = r#"<svg:svg width="100" height="100"><svg:circle cx="5" cy="5" r="2"/></svg:svg>"#;
    let drawing = SvgDrawing::parse(svg).unwrap();
    assert_eq!(drawing.elements.len(), 1);
    assert_eq!(drawing.elements[0].kind, ElementKind::Circle);
}

#[test]
fn test_circle_flattens_within_bounds() {
    let svg = r#"<svg width="100" height="100"><circle cx="50" cy="50" r="40"/></svg>"#;
    let drawing = SvgDrawing::parse(svg).unwrap();
    let points = point_generator(&drawing.elements[0].path, None, 0.02);

    assert!(points.len() > 20, "circle should flatten to many segments");
    for p in &points {
        let r = ((p.x - 50.0).powi(2) + (p.y - 50.0).powi(2)).sqrt();
        assert!((r - 40.0).abs() < 0.5, "point off the circle: {:?}", p);
    }
}

//! SVG document parsing.
//!
//! Extracts the drawing dimensions and every drawable element, in document
//! order, from SVG text. Only the element kinds the pipeline can cut are
//! kept; containers, metadata and anything else are skipped silently.

use lyon::math::{point, vector, Angle, Transform};
use lyon::path::{Path, Winding};
use regex::Regex;
use tracing::debug;

use svgcam_core::{Result, SvgError};

use crate::path_data::parse_path_data;

/// The drawable element kinds the pipeline recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Rect,
    Circle,
    Ellipse,
    Line,
    Polyline,
    Polygon,
    Path,
}

impl ElementKind {
    /// Map a tag's local name to a kind; `None` for anything the pipeline
    /// does not cut (groups, defs, metadata, ...).
    pub fn from_tag(local_name: &str) -> Option<Self> {
        match local_name {
            "rect" => Some(Self::Rect),
            "circle" => Some(Self::Circle),
            "ellipse" => Some(Self::Ellipse),
            "line" => Some(Self::Line),
            "polyline" => Some(Self::Polyline),
            "polygon" => Some(Self::Polygon),
            "path" => Some(Self::Path),
            _ => None,
        }
    }
}

/// One drawable element: its kind, outline and optional transform.
#[derive(Debug, Clone)]
pub struct SvgElement {
    pub kind: ElementKind,
    pub path: Path,
    pub transform: Option<Transform>,
}

/// A parsed drawing: dimensions plus drawable elements in document order.
#[derive(Debug, Clone)]
pub struct SvgDrawing {
    /// Drawing width in drawing units
    pub width: f64,
    /// Drawing height in drawing units
    pub height: f64,
    /// Drawable elements in document order
    pub elements: Vec<SvgElement>,
}

/// Attributes of one element open tag.
struct Attrs(Vec<(String, String)>);

impl Attrs {
    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|v| v.trim().parse().ok())
    }

    /// Numeric value with a default of 0.0, the SVG convention for
    /// omitted geometry attributes.
    fn coord(&self, name: &str) -> f64 {
        self.get_f64(name).unwrap_or(0.0)
    }
}

impl SvgDrawing {
    /// Parse SVG text into a drawing.
    ///
    /// Fails when the content has no `<svg>` element or declares no usable
    /// dimensions; individual malformed elements are dropped, not fatal.
    pub fn parse(content: &str) -> Result<Self> {
        if !content.contains("<svg") {
            return Err(SvgError::NotSvg {
                reason: "missing <svg> element".to_string(),
            }
            .into());
        }

        let re_tag =
            Regex::new(r"<([A-Za-z][A-Za-z0-9:_-]*)([^>]*)>").expect("invalid tag regex");
        let re_attr = Regex::new(r#"([A-Za-z_][A-Za-z0-9:_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("invalid attr regex");

        let mut dims: Option<(f64, f64)> = None;
        let mut elements = Vec::new();

        for cap in re_tag.captures_iter(content) {
            let local_name = cap[1].rsplit(':').next().unwrap_or(&cap[1]).to_string();
            let attrs = Attrs(
                re_attr
                    .captures_iter(&cap[2])
                    .map(|a| {
                        let value = a.get(2).or_else(|| a.get(3)).map_or("", |m| m.as_str());
                        (a[1].to_string(), value.to_string())
                    })
                    .collect(),
            );

            if local_name == "svg" && dims.is_none() {
                dims = Some(drawing_dimensions(&attrs)?);
                continue;
            }

            let Some(kind) = ElementKind::from_tag(&local_name) else {
                debug!(tag = %local_name, "skipping non-drawable element");
                continue;
            };

            match element_path(kind, &attrs) {
                Some(path) => elements.push(SvgElement {
                    kind,
                    path,
                    transform: attrs.get("transform").and_then(parse_matrix_transform),
                }),
                None => debug!(tag = %local_name, "dropping element with degenerate geometry"),
            }
        }

        let Some((width, height)) = dims else {
            return Err(SvgError::MissingDimensions.into());
        };

        Ok(Self {
            width,
            height,
            elements,
        })
    }
}

/// Resolve the drawing dimensions from `width`/`height` attributes, falling
/// back to the `viewBox` when either is missing.
fn drawing_dimensions(attrs: &Attrs) -> Result<(f64, f64)> {
    let width = attrs.get("width").and_then(parse_length);
    let height = attrs.get("height").and_then(parse_length);

    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        _ => {
            let viewbox = attrs.get("viewBox").ok_or(SvgError::MissingDimensions)?;
            let parts: Vec<f64> = viewbox
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|s| !s.is_empty())
                .filter_map(|s| s.parse().ok())
                .collect();
            if parts.len() < 4 {
                return Err(SvgError::MissingDimensions.into());
            }
            (parts[2], parts[3])
        }
    };

    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(SvgError::InvalidDimensions { width, height }.into());
    }

    Ok((width, height))
}

/// Parse an SVG length, tolerating a unit suffix ("100", "100mm", "12.5cm").
fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let end = value
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    value[..end].parse().ok()
}

/// Build the outline path for one element, or `None` when its geometry is
/// degenerate (zero-size rect, zero radius, fewer than two points).
fn element_path(kind: ElementKind, attrs: &Attrs) -> Option<Path> {
    let mut builder = Path::builder();

    match kind {
        ElementKind::Rect => {
            let (x, y) = (attrs.coord("x"), attrs.coord("y"));
            let (w, h) = (attrs.coord("width"), attrs.coord("height"));
            if w <= 0.0 || h <= 0.0 {
                return None;
            }
            builder.begin(point(x as f32, y as f32));
            builder.line_to(point((x + w) as f32, y as f32));
            builder.line_to(point((x + w) as f32, (y + h) as f32));
            builder.line_to(point(x as f32, (y + h) as f32));
            builder.close();
        }
        ElementKind::Circle => {
            let r = attrs.coord("r");
            if r <= 0.0 {
                return None;
            }
            builder.add_circle(
                point(attrs.coord("cx") as f32, attrs.coord("cy") as f32),
                r as f32,
                Winding::Positive,
            );
        }
        ElementKind::Ellipse => {
            let (rx, ry) = (attrs.coord("rx"), attrs.coord("ry"));
            if rx <= 0.0 || ry <= 0.0 {
                return None;
            }
            builder.add_ellipse(
                point(attrs.coord("cx") as f32, attrs.coord("cy") as f32),
                vector(rx as f32, ry as f32),
                Angle::radians(0.0),
                Winding::Positive,
            );
        }
        ElementKind::Line => {
            builder.begin(point(attrs.coord("x1") as f32, attrs.coord("y1") as f32));
            builder.line_to(point(attrs.coord("x2") as f32, attrs.coord("y2") as f32));
            builder.end(false);
        }
        ElementKind::Polyline | ElementKind::Polygon => {
            let points = parse_point_list(attrs.get("points")?);
            let (first, rest) = points.split_first()?;
            if rest.is_empty() {
                return None;
            }
            builder.begin(point(first.0 as f32, first.1 as f32));
            for &(x, y) in rest {
                builder.line_to(point(x as f32, y as f32));
            }
            if kind == ElementKind::Polygon {
                builder.close();
            } else {
                builder.end(false);
            }
        }
        ElementKind::Path => {
            let path = parse_path_data(attrs.get("d")?);
            if path.iter().next().is_none() {
                return None;
            }
            return Some(path);
        }
    }

    Some(builder.build())
}

/// Parse a polyline/polygon `points` attribute into coordinate pairs.
fn parse_point_list(value: &str) -> Vec<(f64, f64)> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<f64>().ok())
        .collect::<Vec<_>>()
        .chunks(2)
        .filter(|chunk| chunk.len() == 2)
        .map(|chunk| (chunk[0], chunk[1]))
        .collect()
}

/// Parse a `transform="matrix(a,b,c,d,e,f)"` attribute.
fn parse_matrix_transform(transform_str: &str) -> Option<Transform> {
    let trimmed = transform_str.trim();
    let inner = trimmed.strip_prefix("matrix(")?.strip_suffix(')')?;

    let values: Vec<f32> = inner
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();

    if values.len() != 6 {
        return None;
    }

    Some(Transform::new(
        values[0], values[1], values[2], values[3], values[4], values[5],
    ))
}

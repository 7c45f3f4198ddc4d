//! Curve flattening: path outlines to ordered point sequences.

use lyon::algorithms::path::iterator::PathIterator;
use lyon::math::Transform;
use lyon::path::Path;
use svgcam_core::Point;

/// Flatten a path into an ordered sequence of drawing-space points.
///
/// Applies `transform` (when present) before flattening. `smoothness` is
/// the flattening tolerance in drawing units; curves are subdivided until
/// each segment deviates from the true curve by at most this amount.
///
/// Deterministic for identical inputs. An empty path yields an empty
/// sequence, which callers treat as "no geometry".
pub fn point_generator(path: &Path, transform: Option<&Transform>, smoothness: f64) -> Vec<Point> {
    let transformed;
    let path = match transform {
        Some(t) => {
            transformed = path.clone().transformed(t);
            &transformed
        }
        None => path,
    };

    let mut points = Vec::new();

    for event in path.iter().flattened(smoothness as f32) {
        match event {
            lyon::path::Event::Begin { at } => {
                points.push(Point::new(at.x as f64, at.y as f64));
            }
            lyon::path::Event::Line { to, .. } => {
                points.push(Point::new(to.x as f64, to.y as f64));
            }
            lyon::path::Event::End { first, close, .. } => {
                if close {
                    points.push(Point::new(first.x as f64, first.y as f64));
                }
            }
            _ => {}
        }
    }

    points
}

//! # svgcam import
//!
//! The SVG front end: parses a document into drawable elements (in
//! document order) and flattens their outlines into ordered point
//! sequences for the motion pipeline.
//!
//! Element outlines are represented as `lyon` paths; curve subdivision is
//! delegated to lyon's flattening iterator, controlled by the `smoothness`
//! tolerance from the configuration.

pub mod flatten;
pub mod path_data;
pub mod svg;

pub use flatten::point_generator;
pub use svg::{ElementKind, SvgDrawing, SvgElement};

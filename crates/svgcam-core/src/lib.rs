//! # svgcam core
//!
//! Shared types and error handling for the svgcam workspace.
//! Provides the drawing-space geometry primitives and the layered
//! error model used by every other crate.

pub mod error;
pub mod geometry;

pub use error::{ConfigError, Error, Result, SvgError};
pub use geometry::Point;

//! Error handling for svgcam
//!
//! Provides error types for the two layers that can fail terminally:
//! - Configuration errors (invalid or unreadable settings)
//! - SVG errors (unreadable or structurally unusable documents)
//!
//! Per-shape anomalies (unrecognized tags, empty geometry, out-of-bounds
//! points) are absorbed inside the pipeline and never surface as errors.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Represents errors in the run-wide configuration. Any of these is fatal
/// to a conversion: without a valid envelope no scale factor can be
/// established, so the pipeline refuses to emit anything.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// A numeric setting is out of its valid range
    #[error("Invalid value for {setting}: {reason}")]
    InvalidValue {
        /// The setting with the invalid value.
        setting: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// Config file could not be read
    #[error("Failed to read config file: {reason}")]
    Unreadable {
        /// The reason the file could not be read.
        reason: String,
    },

    /// Config file could not be parsed
    #[error("Malformed config file: {reason}")]
    Malformed {
        /// The parser's description of the problem.
        reason: String,
    },

    /// Config file has an unsupported extension
    #[error("Config file must be .toml or .json")]
    UnsupportedFormat,
}

/// SVG document error type
///
/// Represents errors that make an input document unusable as a whole.
#[derive(Error, Debug, Clone)]
pub enum SvgError {
    /// The file is not an SVG document
    #[error("Not an SVG document: {reason}")]
    NotSvg {
        /// Why the content was rejected.
        reason: String,
    },

    /// The document declares no usable dimensions
    #[error("Unable to determine drawing width and height (no width/height attributes or viewBox)")]
    MissingDimensions,

    /// The declared dimensions are unusable
    #[error("Invalid drawing dimensions: {width} x {height}")]
    InvalidDimensions {
        /// Declared width.
        width: f64,
        /// Declared height.
        height: f64,
    },
}

/// Main error type for svgcam
///
/// A unified error type that can represent any terminal failure.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// SVG document error
    #[error(transparent)]
    Svg(#[from] SvgError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this is an SVG document error
    pub fn is_svg_error(&self) -> bool {
        matches!(self, Error::Svg(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

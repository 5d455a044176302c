//! Error type for the cropper boundary.
//!
//! The reducer itself never fails. These errors are raised where external
//! input enters the engine: session initialisation, action validation and
//! the export contract.

use thiserror::Error;

/// Errors raised when input is rejected before it reaches the reducer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropperError {
    /// Image dimensions must be finite and strictly positive.
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// An action carried NaN or an infinite value.
    #[error("Non-finite value for {field}")]
    NonFinite { field: &'static str },

    /// A resize direction name that is not one of the eight compass points.
    #[error("Unknown resize direction: {0}")]
    UnknownDirection(String),

    /// The limits configuration is inconsistent.
    #[error("Invalid limits: {0}")]
    InvalidLimits(String),

    /// The natural bitmap size does not have the session image's aspect ratio.
    #[error("Natural size {natural_width}x{natural_height} does not match image {width}x{height}")]
    AspectMismatch {
        natural_width: f64,
        natural_height: f64,
        width: f64,
        height: f64,
    },
}

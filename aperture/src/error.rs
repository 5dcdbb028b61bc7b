//! Error type shared by the aperture model, registry and output collaborators.

use thiserror::Error;

/// Errors that can occur while building a camera registry or writing results.
#[derive(Error, Debug)]
pub enum ApertureError {
    #[error("Camera {id}: {field} must be a positive finite value, got {value}")]
    InvalidCamera {
        id: u32,
        field: &'static str,
        value: f64,
    },
    #[error("Camera id {0} appears more than once in the registry")]
    DuplicateCameraId(u32),
    #[error("Camera registry must contain at least one camera")]
    EmptyRegistry,
    #[error(
        "Focal length domain {min}..={max} is invalid (need 1 <= min <= max <= {})",
        crate::selector::MAX_FOCAL_LENGTH_MM
    )]
    InvalidDomain { min: u32, max: u32 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Camera config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Chart rendering failed: {0}")]
    Plot(String),
}

//! Full-frame equivalent aperture comparison for multi-camera systems
//!
//! This crate models cameras that crop into their sensor to emulate longer
//! focal lengths, computes the full-frame equivalent f-number each camera
//! reaches at every focal length, and picks the best camera per focal
//! length. Results can be exported as CSV and rendered as a PNG chart.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod plot;
pub mod range_arg;
pub mod report;
pub mod selector;

// Re-exports for easier access
pub use camera::{CameraColor, CameraDescriptor, CameraRegistry};
pub use error::ApertureError;
pub use geometry::{crop_factor, equivalent_aperture};
pub use plot::render_chart;
pub use report::{report_rows, write_results_csv, ReportRow};
pub use selector::{select_best_apertures, BestAperture, FocalLengthDomain, ResultsTable};

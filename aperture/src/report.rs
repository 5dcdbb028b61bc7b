//! CSV export of the best-aperture table.
//!
//! Apertures are written negated so that wider (better) apertures sort and
//! plot higher. Focal lengths that no camera covers are written as `-inf`
//! with an empty camera id.

use crate::error::ApertureError;
use crate::selector::{BestAperture, ResultsTable};
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Default output file for the results table
pub const DEFAULT_CSV_FILENAME: &str = "aperture_results.csv";

const HEADERS: [&str; 3] = [
    "Focal Length (mm)",
    "Best Aperture Value (Negative)",
    "Camera ID",
];

/// One row of the exported table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub focal_length_mm: u32,
    /// Negated equivalent aperture; negative infinity when unresolved
    pub negated_aperture: f64,
    pub camera_id: Option<u32>,
}

/// Convert the table to report rows in ascending focal length order
pub fn report_rows(table: &ResultsTable) -> Vec<ReportRow> {
    table
        .iter()
        .map(|(focal_length_mm, record)| match *record {
            BestAperture::Resolved {
                camera_id,
                aperture,
            } => ReportRow {
                focal_length_mm,
                negated_aperture: -aperture,
                camera_id: Some(camera_id),
            },
            BestAperture::Unresolved => ReportRow {
                focal_length_mm,
                negated_aperture: f64::NEG_INFINITY,
                camera_id: None,
            },
        })
        .collect()
}

/// Write the header and one row per focal length
pub fn write_results<W: Write>(table: &ResultsTable, writer: W) -> Result<(), ApertureError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADERS)?;

    for row in report_rows(table) {
        wtr.write_record(&[
            row.focal_length_mm.to_string(),
            row.negated_aperture.to_string(),
            row.camera_id.map(|id| id.to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the results table to a CSV file, replacing any existing file
pub fn write_results_csv(table: &ResultsTable, path: &Path) -> Result<(), ApertureError> {
    let file = File::create(path)?;
    write_results(table, file)?;

    info!("Wrote {} rows to {}", table.domain().len(), path.display());
    Ok(())
}

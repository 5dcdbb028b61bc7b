//! PNG chart of the winning equivalent aperture per camera.
//!
//! Each camera gets one line-and-marker series through the focal lengths it
//! wins. Apertures are negated, matching the CSV export, so wider apertures
//! appear higher on the chart.

use crate::camera::{CameraColor, CameraRegistry};
use crate::error::ApertureError;
use crate::selector::ResultsTable;
use log::{info, warn};
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;

/// Default output path for the chart
pub const DEFAULT_PLOT_PATH: &str = "plots/equivalent_aperture.png";

const TITLE: &str = "Equivalent Aperture (negated) vs Focal Length per CMOS Camera";
const CHART_SIZE: (u32, u32) = (1000, 600);
const MARKER_SIZE: i32 = 3;

// Used when no focal length is resolved and the data gives no y bounds
const FALLBACK_Y_RANGE: Range<f64> = -1.0..0.0;

fn plot_error<E: std::fmt::Display>(err: E) -> ApertureError {
    ApertureError::Plot(err.to_string())
}

fn series_color(color: CameraColor) -> RGBColor {
    match color {
        CameraColor::Blue => BLUE,
        CameraColor::Red => RED,
        CameraColor::Green => GREEN,
        CameraColor::Magenta => MAGENTA,
        CameraColor::Cyan => CYAN,
        CameraColor::Black => BLACK,
        CameraColor::Yellow => YELLOW,
    }
}

/// (focal length, negated aperture) points won by a camera, in ascending focal length order
pub fn camera_series(table: &ResultsTable, camera_id: u32) -> Vec<(u32, f64)> {
    table
        .iter()
        .filter(|(_, record)| record.camera_id() == Some(camera_id))
        .filter_map(|(focal_length, record)| record.aperture().map(|a| (focal_length, -a)))
        .collect()
}

/// Y axis bounds covering every resolved negated aperture, padded by 5%.
///
/// Returns None when the table has no resolved entries.
pub fn negated_aperture_range(table: &ResultsTable) -> Option<Range<f64>> {
    let values: Vec<f64> = table
        .iter()
        .filter_map(|(_, record)| record.aperture())
        .map(|a| -a)
        .collect();

    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let padding = if max > min { (max - min) * 0.05 } else { 0.5 };

    Some((min - padding)..(max + padding))
}

/// Render the chart to a PNG file, creating the parent directory if needed
pub fn render_chart(
    table: &ResultsTable,
    registry: &CameraRegistry,
    path: &Path,
) -> Result<(), ApertureError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let y_range = negated_aperture_range(table).unwrap_or_else(|| {
        warn!("No focal length is covered by any camera, chart will be empty");
        FALLBACK_Y_RANGE
    });
    let domain = table.domain();

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(domain.min()..domain.max().saturating_add(1), y_range)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Focal Length (mm)")
        .y_desc("Equivalent Aperture (negated)")
        .y_label_formatter(&|y| format!("{y:.1}"))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_error)?;

    for camera in registry.cameras() {
        let points = camera_series(table, camera.id);
        if points.is_empty() {
            warn!("Camera {} wins no focal length", camera.id);
        }

        let color = series_color(camera.color);

        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))
            .map_err(plot_error)?
            .label(camera.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        chart
            .draw_series(PointSeries::of_element(
                points.iter().copied(),
                MARKER_SIZE,
                &color,
                &|c, s, st| Circle::new(c, s, st.filled()),
            ))
            .map_err(plot_error)?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;

    info!("Chart saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{select_best_apertures, FocalLengthDomain};
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_series_follows_winners() {
        let mut table = ResultsTable::unresolved(FocalLengthDomain::new(10, 14).unwrap());
        table.offer(11, 1, 3.0);
        table.offer(12, 2, 2.0);
        table.offer(13, 1, 4.0);

        assert_eq!(camera_series(&table, 1), vec![(11, -3.0), (13, -4.0)]);
        assert_eq!(camera_series(&table, 2), vec![(12, -2.0)]);
        assert!(camera_series(&table, 3).is_empty());
    }

    #[test]
    fn test_reference_series_cover_all_resolved() {
        let registry = CameraRegistry::reference();
        let table = select_best_apertures(&registry, &FocalLengthDomain::reference());

        let total: usize = registry
            .cameras()
            .iter()
            .map(|c| camera_series(&table, c.id).len())
            .sum();
        assert_eq!(total, 187);

        let telephoto = camera_series(&table, 3);
        assert_eq!(telephoto.first().map(|p| p.0), Some(70));
        assert!(telephoto.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_range_ignores_unresolved() {
        let mut table = ResultsTable::unresolved(FocalLengthDomain::new(1, 4).unwrap());
        assert!(negated_aperture_range(&table).is_none());

        table.offer(2, 1, 2.0);
        table.offer(3, 1, 12.0);
        let range = negated_aperture_range(&table).unwrap();
        assert!(range.start.is_finite() && range.end.is_finite());
        assert_relative_eq!(range.start, -12.5);
        assert_relative_eq!(range.end, -1.5);
    }

    #[test]
    fn test_range_single_value_is_padded() {
        let mut table = ResultsTable::unresolved(FocalLengthDomain::new(5, 5).unwrap());
        table.offer(5, 1, 4.0);
        let range = negated_aperture_range(&table).unwrap();
        assert_relative_eq!(range.start, -4.5);
        assert_relative_eq!(range.end, -3.5);
    }
}

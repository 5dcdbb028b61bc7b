//! Find the camera with the widest full-frame equivalent aperture at each focal length
//!
//! Sweeps every camera over the focal lengths it can reach by cropping,
//! writes the winning camera per focal length to CSV and plots one series
//! per camera.
//!
//! Usage:
//! ```
//! cargo run --bin equivalent_aperture -- [OPTIONS]
//! ```
//!
//! Set `RUST_LOG=debug` for per-camera sweep details.

use aperture::camera::CameraRegistry;
use aperture::plot::{render_chart, DEFAULT_PLOT_PATH};
use aperture::range_arg::FocalRangeArg;
use aperture::report::{write_results_csv, DEFAULT_CSV_FILENAME};
use aperture::selector::select_best_apertures;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare full-frame equivalent apertures across cameras"
)]
struct Args {
    /// Focal length range to report on in mm (min:max)
    #[arg(long, default_value_t = FocalRangeArg::default())]
    focal_range: FocalRangeArg,

    /// JSON camera registry to use instead of the built-in cameras
    #[arg(long)]
    cameras: Option<PathBuf>,

    /// Write the active camera registry as JSON to this path
    #[arg(long)]
    save_cameras: Option<PathBuf>,

    /// Output CSV filename
    #[arg(long, default_value = DEFAULT_CSV_FILENAME)]
    output_csv: PathBuf,

    /// Output chart filename
    #[arg(long, default_value = DEFAULT_PLOT_PATH)]
    output_plot: PathBuf,

    /// Skip rendering the chart
    #[arg(long, default_value_t = false)]
    no_plot: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging from environment variables
    env_logger::init();

    let args = Args::parse();

    let registry = match &args.cameras {
        Some(path) => {
            info!("Loading cameras from {}", path.display());
            CameraRegistry::load_from_file(path)?
        }
        None => CameraRegistry::reference(),
    };

    if let Some(path) = &args.save_cameras {
        registry.save_to_file(path)?;
        println!("Camera registry saved to {}", path.display());
    }

    let domain = args.focal_range.to_domain()?;
    info!(
        "Sweeping {} cameras over {}..={}mm",
        registry.len(),
        domain.min(),
        domain.max()
    );

    let table = select_best_apertures(&registry, &domain);

    let wins = table.wins_by_camera();
    for camera in registry.cameras() {
        match wins.get(&camera.id) {
            Some(count) => info!("{}: best at {} focal lengths", camera.name, count),
            None => warn!("{}: never the best aperture", camera.name),
        }
    }

    write_results_csv(&table, &args.output_csv)?;
    println!("Data saved to {}", args.output_csv.display());

    if !args.no_plot {
        render_chart(&table, &registry, &args.output_plot)?;
        println!("Plot saved to {}", args.output_plot.display());
    }

    Ok(())
}

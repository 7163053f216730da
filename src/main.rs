use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use isogrid::config::FileConfig;
use isogrid::error::parse_dimension;
use isogrid::geojson::load_boundary;
use isogrid::grid::{FootprintMask, sample_grid, write_points};
use isogrid::progress::create_spinner;

/// Print an evenly spaced sampling grid over the bounding box of a GeoJSON footprint
///
/// Every point is written to stdout as "<x> <y> <z>", x-major then y-minor,
/// at the vertical midpoint of the footprint's elevation range.
///
/// Examples:
///   # 100 x 100 grid over a building outline
///   isogrid building.geojson 100 100 > grid.txt
///
///   # Only the points on the footprint itself, two decimals
///   isogrid site.geojson 50 80 --inside --precision 2
#[derive(Parser, Debug)]
#[command(name = "isogrid")]
#[command(version, about, long_about = None)]
struct Args {
    /// GeoJSON feature collection with Polygon/MultiPolygon footprints
    input: PathBuf,

    /// Number of samples along x
    #[arg(value_name = "NX", allow_hyphen_values = true)]
    nx: String,

    /// Number of samples along y
    #[arg(value_name = "NY", allow_hyphen_values = true)]
    ny: String,

    /// Path to config file (optional, auto-searches isogrid.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print points that fall on the footprint polygons
    #[arg(long)]
    inside: bool,

    /// Fixed number of decimals for coordinates (default: shortest exact form)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=17))]
    precision: Option<u8>,

    /// Enable verbose logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = FileConfig::resolve(args.config.as_deref())?.unwrap_or_default();

    let nx = parse_dimension("Nx", &args.nx)?;
    let ny = parse_dimension("Ny", &args.ny)?;
    let verbose = args.verbose || file_config.verbose;
    let inside = args.inside || file_config.inside;
    let precision = args
        .precision
        .map(usize::from)
        .or(file_config.precision);

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Input: {}", args.input.display());
        eprintln!("  Grid: {} x {}", nx, ny);
        eprintln!(
            "  Footprint mask: {}",
            if inside { "enabled" } else { "disabled" }
        );
        match precision {
            Some(d) => eprintln!("  Precision: {} decimals", d),
            None => eprintln!("  Precision: shortest"),
        }
        eprintln!();
    }

    let spinner = create_spinner("Loading boundary...", verbose);
    let start = Instant::now();
    let boundary = load_boundary(&args.input).context("Failed to load boundary")?;
    spinner.finish_with_message(format!(
        "Loaded {} boundary points from {} rings [{:.1}s]",
        boundary.len(),
        boundary.rings().len(),
        start.elapsed().as_secs_f32()
    ));

    let grid = sample_grid(&boundary, nx, ny).context("Failed to build sampling grid")?;
    if verbose {
        let extent = grid.extent();
        eprintln!(
            "  Extent: x [{}, {}], y [{}, {}], z [{}, {}]",
            extent.min_x, extent.max_x, extent.min_y, extent.max_y, extent.min_z, extent.max_z
        );
        eprintln!("  Elevation: {}", grid.elevation());
        eprintln!("  Points: {}", grid.len());
    }

    let spinner = create_spinner("Writing grid points...", verbose);
    let start = Instant::now();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let written = if inside {
        let mask = FootprintMask::new(&boundary);
        write_points(&mut writer, mask.retain(&grid), precision)
    } else {
        write_points(&mut writer, &grid, precision)
    }
    .context("Failed to write grid points")?;

    spinner.finish_with_message(format!(
        "Wrote {} of {} points [{:.1}s]",
        written,
        grid.len(),
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        eprintln!();
        eprintln!(
            "Done! Total time: {:.1}s",
            total_start.elapsed().as_secs_f32()
        );
    }

    Ok(())
}

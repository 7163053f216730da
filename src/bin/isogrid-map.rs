use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use isogrid::config::FileConfig;
use isogrid::error::parse_dimension;
use isogrid::progress::create_spinner;
use isogrid::results::{ValueGrid, load_results};

/// Reshape per-sample analysis results into a normalized Nx x Ny matrix
///
/// Reads the results of an analysis run over an `isogrid` grid (one line per
/// sample, value in the last column), clips the values to a percentile
/// window, rescales them to [0, 1] and prints one matrix row per x sample.
///
/// Examples:
///   isogrid-map results.txt 100 100 > matrix.txt
///   isogrid-map results.txt 100 100 --clip-low 5 --clip-high 95
#[derive(Parser, Debug)]
#[command(name = "isogrid-map")]
#[command(version, about, long_about = None)]
struct Args {
    /// Results file, one sample per line
    input: PathBuf,

    /// Number of samples along x (matrix rows)
    #[arg(value_name = "NX", allow_hyphen_values = true)]
    nx: String,

    /// Number of samples along y (matrix columns)
    #[arg(value_name = "NY", allow_hyphen_values = true)]
    ny: String,

    /// Path to config file (optional, auto-searches isogrid.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lower clipping percentile
    #[arg(long)]
    clip_low: Option<f64>,

    /// Upper clipping percentile
    #[arg(long)]
    clip_high: Option<f64>,

    /// Decimals per printed value
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u8).range(0..=17))]
    precision: u8,

    /// Enable verbose logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = FileConfig::resolve(args.config.as_deref())?.unwrap_or_default();

    let nx = parse_dimension("Nx", &args.nx)?;
    let ny = parse_dimension("Ny", &args.ny)?;
    let verbose = args.verbose || file_config.verbose;
    let clip_low = args.clip_low.unwrap_or(file_config.clip_low);
    let clip_high = args.clip_high.unwrap_or(file_config.clip_high);

    if clip_low > clip_high {
        bail!(
            "--clip-low ({}) must not exceed --clip-high ({})",
            clip_low,
            clip_high
        );
    }

    let spinner = create_spinner("Reading results...", verbose);
    let values = load_results(&args.input).context("Failed to read results")?;
    spinner.finish_with_message(format!("Read {} values", values.len()));

    let mut grid = ValueGrid::from_values(values, nx, ny).context("Failed to reshape results")?;
    let (low, high) = grid
        .clip_percentiles(clip_low, clip_high)
        .context("Failed to clip results")?;
    if verbose {
        eprintln!(
            "  Clipped to [{}, {}] (percentiles {} - {})",
            low, high, clip_low, clip_high
        );
    }
    grid.normalize();

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let d = usize::from(args.precision);

    for row in grid.rows() {
        let line = row
            .iter()
            .map(|v| format!("{:.d$}", v, d = d))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line).context("Failed to write matrix")?;
    }
    writer.flush().context("Failed to write matrix")?;

    Ok(())
}

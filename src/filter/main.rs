//! Geofence filter pipeline.
//!
//! Loads a CSV of points, keeps the rows inside the service-area fence,
//! and writes the survivors to a new CSV.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use palisade::config::BoundaryConfig;
use palisade::fence;
use palisade::pipeline::{self, MalformedPolicy};

#[derive(Parser, Debug)]
#[command(name = "filter")]
#[command(about = "Filter CSV records to those inside the service-area fence")]
struct Args {
    /// Input CSV with Latitude and Longitude columns
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "filtered_data.csv")]
    output: PathBuf,

    /// Optional TOML boundary file overriding the built-in service area
    #[arg(long)]
    boundary: Option<PathBuf>,

    /// Skip rows with unparseable coordinates instead of failing the run
    #[arg(long)]
    lenient: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Palisade Geofence Filter");
    info!("Input: {}", args.input.display());

    // Build the fence before touching any input
    let fence = match &args.boundary {
        Some(path) => {
            let config = BoundaryConfig::load_from_file(path)?;
            info!(
                "Using boundary '{}' ({} vertices) from {}",
                config.fence.name,
                config.fence.vertices.len(),
                path.display()
            );
            config.build_fence()?
        }
        None => fence::service_area(),
    };

    let policy = if args.lenient {
        MalformedPolicy::Lenient
    } else {
        MalformedPolicy::Strict
    };

    let summary = pipeline::run(&args.input, &args.output, &fence, policy)?;

    info!(
        "Filtered data saved to {}. Rows: {}",
        args.output.display(),
        summary.kept
    );

    Ok(())
}

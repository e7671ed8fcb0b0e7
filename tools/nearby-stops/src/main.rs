use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use parada_transit::prelude::*;
use std::path::{Path, PathBuf};

mod output;

use output::{render_routes, render_view};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Great-circle meters (accurate anywhere)
    Haversine,
    /// Raw degree distance (cheap, city scale only)
    Planar,
}

impl From<Mode> for DistanceMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Haversine => DistanceMode::Haversine,
            Mode::Planar => DistanceMode::Planar,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "nearby-stops",
    author,
    version,
    about = "List the bus stops closest to a position",
    long_about = "Ranks the stops of a route dataset by distance from a position, \
                  optionally keeping only those within a kilometer limit, and \
                  reports the closest stop.\n\n\
                  Without --lat/--lon the stops are listed in dataset order, the \
                  same way the app behaves before its first location fix."
)]
struct Args {
    /// Latitude of the current position, in degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude of the current position, in degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Only show stops of this route
    #[arg(short, long)]
    route: Option<String>,

    /// Only show stops within this many kilometers
    #[arg(short, long)]
    limit: Option<f64>,

    /// Distance mode used for ranking and the limit
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Route dataset JSON file (defaults to the built-in routes)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Engine config JSON file; command-line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the board as JSON
    #[arg(long)]
    json: bool,

    /// List the routes of the dataset and exit
    #[arg(long)]
    list_routes: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let dataset = load_dataset(args.dataset.as_deref())?;
    log::debug!("Loaded {} routes, {} stops", dataset.routes.len(), dataset.stop_count());

    if args.list_routes {
        print!("{}", render_routes(&dataset));
        return Ok(());
    }

    let config = build_config(&args)?;
    if let Some(limit) = config.limit_km {
        if limit < 0.0 || !limit.is_finite() {
            bail!("Limit must be a non-negative number of kilometers, got {limit}");
        }
        if !EXTENDED_DISTANCE_LIMITS.iter().any(|l| l.value == Some(limit)) {
            log::debug!("Limit {limit} km is not one of the app's picker values");
        }
    }

    let fix = args.lat.zip(args.lon).map(|(lat, lon)| Coordinate::new(lat, lon));
    match fix {
        Some(c) if !c.is_valid() => log::warn!("Position ({}, {}) is out of range", c.latitude, c.longitude),
        Some(_) => {}
        None => log::info!("No position given, listing stops in dataset order"),
    }

    let mode = config.mode;
    let provider = dataset.into_provider();
    let board = StopBoard::new(config, &provider).context("Failed to build stop board")?;
    let view = board.refresh(fix);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_view(&view, mode));
    }

    Ok(())
}

fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read dataset {}", path.display()))?;
            Dataset::from_json(&json).with_context(|| format!("Invalid dataset {}", path.display()))
        }
        None => Dataset::builtin().context("Built-in dataset is invalid"),
    }
}

/// Defaults, then the config file, then command-line flags
fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            EngineConfig::from_json(&json).with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if args.limit.is_some() {
        config.limit_km = args.limit;
    }
    if let Some(route) = &args.route {
        config.route = Some(RouteIdentifier::new(route));
    }

    Ok(config)
}

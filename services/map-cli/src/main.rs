//! map-cli: render a geocoded scalar dataset as a marker or heatmap layer.
//!
//! Logs go to stderr; stdout carries only the rendered output.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use map_cli::config::{load_config, AppConfig, ConfigOrigin, LogFormat, ModeName};
use map_cli::output::{format_output, OutputFormat};
use map_cli::source::JsonFileSource;
use map_cli::exit_status;
use map_common::{MapError, PaletteConfig, PaletteName, RecordSource};
use renderer::{clamp_sample_size, render, HeatmapParams, RenderMode, RenderRequest};

#[derive(Parser, Debug)]
#[command(name = "map-cli")]
#[command(about = "Render geocoded scalar data as colored markers or a heatmap")]
struct Args {
    /// Configuration file path
    #[arg(short, long, env = "MAP_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset JSON file (overrides config)
    #[arg(short, long, env = "MAP_DATASET")]
    dataset: Option<PathBuf>,

    /// Name of the scalar attribute field in the dataset
    #[arg(long, env = "MAP_ATTRIBUTE")]
    attribute: Option<String>,

    /// Number of records to sample for display
    #[arg(short = 'n', long)]
    sample_size: Option<usize>,

    /// Sampling seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rendering mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeName>,

    /// Heatmap kernel radius
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<i64>,

    /// Heatmap blur
    #[arg(long, allow_negative_numbers = true)]
    blur: Option<i64>,

    /// Heatmap max zoom
    #[arg(long, allow_negative_numbers = true)]
    max_zoom: Option<i64>,

    /// Built-in palette for marker mode
    #[arg(long)]
    palette: Option<PaletteName>,

    /// Reject sample sizes larger than the dataset instead of clamping
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "artifact")]
    format: OutputFormat,

    /// Log level
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Log format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("{:#}", err);
            if let Some(map_err) = err.downcast_ref::<MapError>() {
                error!(kind = map_err.kind(), error = %message, "Render failed");
                eprintln!("error [{}]: {}", map_err.kind(), message);
            } else {
                error!(error = %message, "map-cli failed");
                eprintln!("error: {}", message);
            }
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(args: Args) -> Result<()> {
    let (mut config, origin) = load_config(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    init_tracing(&config);

    match &origin {
        ConfigOrigin::File(path) => info!(path = %path.display(), "Loaded configuration"),
        ConfigOrigin::Missing(path) => {
            warn!(path = %path.display(), "Config file does not exist, using defaults")
        }
        ConfigOrigin::Defaults => info!("No config file given, using defaults"),
    }

    let path = config
        .dataset
        .path
        .clone()
        .context("No dataset given: pass --dataset or set dataset.path in config")?;
    let source = JsonFileSource::new(&path, config.dataset.fields.clone());
    info!(source = %source.describe(), "Loading dataset");
    let dataset = source.load()?;
    info!(records = dataset.len(), "Dataset loaded");

    let mut sample_size = config.request.sample_size;
    if !args.strict {
        let clamped = clamp_sample_size(sample_size, dataset.len());
        if clamped != sample_size {
            warn!(requested = sample_size, clamped, "Sample size clamped to dataset size");
        }
        sample_size = clamped;
    }

    let mode = match config.request.mode {
        ModeName::Markers => RenderMode::Markers,
        ModeName::Heatmap => RenderMode::Heatmap(config.request.heatmap),
    };
    let request = RenderRequest {
        sample_size,
        seed: config.request.seed,
        mode,
    };

    let output = render(&dataset, &request, &config.map)?;
    println!("{}", format_output(args.format, &output, &dataset)?);

    info!(
        min = output.value_range.min,
        max = output.value_range.max,
        "Render complete"
    );
    Ok(())
}

/// Command-line flags take precedence over the config file.
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(path) = &args.dataset {
        config.dataset.path = Some(path.clone());
    }
    if let Some(attribute) = &args.attribute {
        config.dataset.fields.value = attribute.clone();
        config.map.markers.attribute = attribute.clone();
    }
    if let Some(n) = args.sample_size {
        config.request.sample_size = n;
    }
    if let Some(seed) = args.seed {
        config.request.seed = seed;
    }
    if let Some(mode) = args.mode {
        config.request.mode = mode;
    }

    let heatmap: &mut HeatmapParams = &mut config.request.heatmap;
    if let Some(radius) = args.radius {
        heatmap.radius = radius;
    }
    if let Some(blur) = args.blur {
        heatmap.blur = blur;
    }
    if let Some(max_zoom) = args.max_zoom {
        heatmap.max_zoom = max_zoom;
    }

    if let Some(name) = args.palette {
        config.map.palette = PaletteConfig::Named { name };
    }
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = args.log_format {
        config.logging.format = format;
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}

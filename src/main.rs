use clap::Parser;
use nir_raster::WeightTriple;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infrared::error::{EXIT_SUCCESS, EXIT_USAGE};
use infrared::models::{AppConfig, ConvertOptions, OptionOverrides, OutputFormat, CONFIG_ENV};
use infrared::services;

#[derive(Parser)]
#[command(name = "infrared", version)]
#[command(about = "Convert an RGB PPM photograph into a pseudo near-infrared grayscale image")]
struct Cli {
    /// Input binary PPM (P6) file
    input: PathBuf,

    /// Output file
    output: PathBuf,

    /// Channel weights as R,G,B; all three are required (a partial list such as
    /// "0.9" is rejected, not padded with defaults). Normalized to sum to 1
    /// [default: 0.75,0.25,0.0]
    #[arg(long, value_name = "R,G,B", allow_hyphen_values = true)]
    weights: Option<WeightTriple>,

    /// Linearize sRGB samples before mixing
    #[arg(long)]
    gamma: bool,

    /// Output container [default: pgm]
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Also write the decoded RGB input as a 24-bit BMP
    #[arg(long, value_name = "PATH")]
    save_rgb_bmp: Option<PathBuf>,

    /// YAML config file (falls back to $INFRARED_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let code = if e.use_stderr() {
                EXIT_USAGE
            } else {
                EXIT_SUCCESS
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    let overrides = OptionOverrides {
        weights: cli.weights,
        gamma: cli.gamma.then_some(true),
        format: cli.format,
    };
    let options = ConvertOptions::resolve(&cli.input, &cli.output, &overrides, &config)
        .with_rgb_bmp(cli.save_rgb_bmp);

    match services::convert(&options) {
        Ok(report) => {
            if let Some(message) = report.secondary.as_ref().and_then(|s| s.failure_message()) {
                eprintln!("{message}");
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.report());
            ExitCode::from(e.exit_code())
        }
    }
}

/// Log to stderr, filtered by RUST_LOG or the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "infrared=debug"
    } else {
        "infrared=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

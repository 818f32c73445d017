use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pnm_dither::config::{DitherConfig, Overrides};
use pnm_dither::pipeline;

#[derive(Parser)]
#[command(name = "pnm-dither")]
#[command(about = "Reduce the bit depth of PGM/PPM images with gamma-correct dithering")]
struct Cli {
    /// Input image (binary PGM or PPM)
    input: PathBuf,

    /// Output image path
    output: PathBuf,

    /// Algorithm: bit-correction, ordered, random, floyd-steinberg, jjn,
    /// sierra, atkinson, halftone (or 0-7)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Target bits per channel (1-8)
    #[arg(short, long)]
    bits: Option<u8>,

    /// Gamma: 0 for sRGB, otherwise a power-law exponent such as 2.2
    #[arg(short, long, allow_negative_numbers = true)]
    gamma: Option<f64>,

    /// Seed for random dithering
    #[arg(short, long)]
    seed: Option<u64>,

    /// Bayer matrix size for ordered dithering (2, 4 or 8)
    #[arg(long)]
    bayer_size: Option<usize>,

    /// Threshold matrix orientation: identity, rotate-left, rotate-right,
    /// flip-horizontal, flip-vertical, transpose, anti-transpose
    #[arg(long)]
    orientation: Option<String>,

    /// Replace the input with a horizontal linear gradient before dithering
    #[arg(long)]
    gradient: bool,

    /// YAML file with defaults for the options above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log per-stage detail
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("pnm_dither=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "pnm_dither=info".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = match &cli.config {
        Some(path) => DitherConfig::load(path),
        None => DitherConfig::default(),
    };
    let config = config.with_overrides(Overrides {
        bits: cli.bits,
        algorithm: cli.algorithm,
        gamma: cli.gamma,
        seed: cli.seed,
        bayer_size: cli.bayer_size,
        orientation: cli.orientation,
    });
    let job = config.resolve()?;

    let summary = pipeline::run(&cli.input, &cli.output, &job, cli.gradient)?;

    match summary.seed {
        Some(seed) => println!(
            "Wrote {} ({}x{}x{}, {}, {} bits, seed {seed})",
            cli.output.display(),
            summary.width,
            summary.height,
            summary.channels,
            summary.algorithm,
            summary.bits
        ),
        None => println!(
            "Wrote {} ({}x{}x{}, {}, {} bits)",
            cli.output.display(),
            summary.width,
            summary.height,
            summary.channels,
            summary.algorithm,
            summary.bits
        ),
    }

    Ok(())
}

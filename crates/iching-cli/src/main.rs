//! CLI frontend for the coin-toss I Ching engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "iching",
    about = "Cast I Ching hexagrams from compass, clock and motion readings",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a hexagram from sensor readings and the current time
    Cast {
        /// Compass azimuth in degrees
        #[arg(short, long, default_value = "0.0", allow_negative_numbers = true)]
        azimuth: f64,

        /// Acceleration magnitude in m/s²
        #[arg(short = 'g', long, default_value = "9.80665", allow_negative_numbers = true)]
        accel: f64,

        /// Timestamp in milliseconds since the Unix epoch (default: now)
        #[arg(short, long, allow_negative_numbers = true)]
        timestamp: Option<i64>,

        /// Cast from this seed instead of deriving one from the readings
        #[arg(short, long, allow_negative_numbers = true)]
        seed: Option<i64>,

        /// Line glyphs: classic, ascii
        #[arg(long, default_value = "classic")]
        style: String,

        /// Omit the primary and relating hexagram names
        #[arg(long)]
        no_names: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a hexagram by its King Wen number
    Lookup {
        /// King Wen sequence number (1-64)
        number: u32,

        /// Line glyphs: classic, ascii
        #[arg(long, default_value = "classic")]
        style: String,
    },

    /// Cast many hexagrams and compare line frequencies with the expected odds
    Stats {
        /// Number of hexagrams to cast
        #[arg(short = 'n', long, default_value = "10000")]
        samples: u32,

        /// Seed for drawing the casting seeds
        #[arg(short, long, default_value = "42")]
        rng_seed: u64,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast {
            azimuth,
            accel,
            timestamp,
            seed,
            style,
            no_names,
            json,
            output,
        } => commands::cast::run(&commands::cast::CastArgs {
            azimuth,
            accel,
            timestamp,
            seed,
            style,
            no_names,
            json,
            output,
        }),
        Commands::Lookup { number, style } => commands::lookup::run(number, &style),
        Commands::Stats { samples, rng_seed } => commands::stats::run(samples, rng_seed),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! fldprep: train/test split and annotation preparation for facial landmark
//! datasets.
//!
//! Given a data directory with `male/` and `female/` image sets and a prior
//! train/test split, fldprep extends the split with newly added images,
//! writes the new manifests, and produces the combined manifests consumed by
//! the landmark annotation editor.
//!
//! # Modules
//!
//! - [`dataset`]: Image keys, directory layout, rectangle and points files
//! - [`manifest`]: Reading and writing split manifests
//! - [`split`]: Seeded train/test split builder
//! - [`export`]: Combined editor manifests and landmark XML
//! - [`prepare`]: The full pipeline
//! - [`error`]: Error types for fldprep operations

pub mod dataset;
pub mod error;
pub mod export;
pub mod manifest;
pub mod prepare;
pub mod split;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use error::FldPrepError;
pub use prepare::{run_prepare, PrepareOptions, PrepareReport};

/// The fldprep CLI application.
#[derive(Parser)]
#[command(name = "fldprep")]
#[command(version, about)]
struct Cli {
    /// Facial landmark data directory (contains male/, female/ and the v1 manifests).
    data_dir: PathBuf,

    /// Number of landmarks per image; selects the `_bv<N>c.txt` points files.
    num_points: u32,

    /// Seed for the train sampling and test balancing draws.
    #[arg(long, env = "FLDPREP_SEED", default_value_t = split::DEFAULT_SEED)]
    seed: u64,

    /// Target number of male train images.
    #[arg(long, env = "FLDPREP_MALE_TRAIN", default_value_t = split::DEFAULT_MALE_TRAIN)]
    male_train: usize,

    /// Target number of female train images.
    #[arg(long, env = "FLDPREP_FEMALE_TRAIN", default_value_t = split::DEFAULT_FEMALE_TRAIN)]
    female_train: usize,

    /// Also write training/testing landmark XML files.
    #[arg(long)]
    xml: bool,

    /// Log per-image progress.
    #[arg(short, long)]
    verbose: bool,

    /// Output format for the run report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Run the fldprep CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), FldPrepError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !matches!(cli.output.as_str(), "text" | "json") {
        return Err(FldPrepError::UnsupportedFormat(format!(
            "'{}' (supported: text, json)",
            cli.output
        )));
    }

    let opts = PrepareOptions {
        data_dir: cli.data_dir,
        num_points: cli.num_points,
        split: split::SplitOptions {
            seed: cli.seed,
            male_train: cli.male_train,
            female_train: cli.female_train,
        },
        write_xml: cli.xml,
    };

    let report = run_prepare(&opts)?;

    match cli.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{}", report),
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "fldprep=debug"
    } else {
        "fldprep=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

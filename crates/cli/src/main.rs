#![deny(unsafe_code)]
//! CLI harness for the legacy generator.
//!
//! Subcommands:
//! - `generate`: draw parity vectors for a list of seeds, print or write JSON
//! - `verify <file>`: replay a recorded vector set and report differences
//! - `variants`: print available generator variants

mod error;

use clap::{Parser, Subcommand, ValueEnum};
use error::CliError;
use legacy_rng_core::{Method, Variant, VectorSet, VectorSpec};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "legacy-rng", about = "Legacy generator parity vector harness")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log more (repeat for debug and trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Sample,
    Next,
    Raw,
    Range,
}

#[derive(Subcommand)]
enum Command {
    /// Draw vectors for each seed and print them (or write them to a file).
    Generate {
        /// Generator variant (full, lite).
        #[arg(long, default_value = "full")]
        variant: String,

        /// Output method to draw from.
        #[arg(short, long, value_enum, default_value_t = MethodArg::Sample)]
        method: MethodArg,

        /// Exclusive upper bound for `--method next`.
        #[arg(long, allow_hyphen_values = true)]
        bound: Option<i32>,

        /// Inclusive lower bound for `--method range`.
        #[arg(long, allow_hyphen_values = true)]
        min: Option<i32>,

        /// Exclusive upper bound for `--method range`.
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i32>,

        /// Draws per seed.
        #[arg(short, long, default_value_t = legacy_rng_core::vector::DEFAULT_COUNT)]
        count: usize,

        /// Comma-separated seeds. Defaults to the built-in boundary list.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        seeds: Vec<i32>,

        /// Read the whole spec from a JSON file instead of the flags above.
        #[arg(long, conflicts_with_all = ["variant", "method", "bound", "min", "max", "count", "seeds"])]
        spec: Option<PathBuf>,

        /// Write the vector set as JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Replay a recorded vector set and report every differing value.
    Verify {
        /// JSON vector set produced by `generate --output`.
        file: PathBuf,
    },
    /// List available generator variants.
    Variants,
}

/// Builds a spec from `generate` flags.
fn spec_from_flags(
    variant: &str,
    method: MethodArg,
    bound: Option<i32>,
    min: Option<i32>,
    max: Option<i32>,
    count: usize,
    seeds: Vec<i32>,
) -> Result<VectorSpec, CliError> {
    let variant = Variant::from_name(variant).map_err(|e| CliError::Input(e.to_string()))?;
    let method = match method {
        MethodArg::Sample => Method::Sample,
        MethodArg::Raw => Method::Raw,
        MethodArg::Next => Method::Next {
            bound: bound.ok_or_else(|| CliError::Input("--method next requires --bound".into()))?,
        },
        MethodArg::Range => match (min, max) {
            (Some(min), Some(max)) => Method::Range { min, max },
            _ => {
                return Err(CliError::Input(
                    "--method range requires --min and --max".into(),
                ))
            }
        },
    };
    let seeds = if seeds.is_empty() {
        legacy_rng_core::vector::DEFAULT_SEEDS.to_vec()
    } else {
        seeds
    };
    Ok(VectorSpec {
        variant,
        method,
        count,
        seeds,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    tracing::debug!(path = %path.display(), "reading json");
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("reading {}: {e}", path.display())))?;
    Ok(serde_json::from_str(&text)?)
}

fn write_set(set: &VectorSet, path: &Path) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(set)?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "writing vector set");
    std::fs::write(path, json + "\n")
        .map_err(|e| CliError::Io(format!("writing {}: {e}", path.display())))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Variants => {
            let names = Variant::list_names();
            if cli.json {
                let info = serde_json::json!({ "variants": names });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Variants:");
                for name in names {
                    println!("  {name}");
                }
            }
        }
        Command::Generate {
            variant,
            method,
            bound,
            min,
            max,
            count,
            seeds,
            spec,
            output,
        } => {
            let spec = match spec {
                Some(path) => read_json::<VectorSpec>(&path)?,
                None => spec_from_flags(&variant, method, bound, min, max, count, seeds)?,
            };
            let set = VectorSet::generate(&spec)?;

            if let Some(path) = &output {
                write_set(&set, path)?;
                eprintln!(
                    "wrote {} records ({} {} x{}) -> {}",
                    set.records.len(),
                    spec.variant,
                    spec.method,
                    spec.count,
                    path.display()
                );
            } else if cli.json {
                println!("{}", serde_json::to_string_pretty(&set)?);
            } else {
                println!("# {} {} x{}", spec.variant, spec.method, spec.count);
                println!("{}", set.to_lines());
            }
        }
        Command::Verify { file } => {
            let set: VectorSet = read_json(&file)?;
            let mismatches = set.verify()?;

            if cli.json {
                let info = serde_json::json!({
                    "file": file.display().to_string(),
                    "records": set.records.len(),
                    "mismatches": &mismatches,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                for m in &mismatches {
                    println!("{m}");
                }
                eprintln!(
                    "verified {} records from {}: {} mismatch(es)",
                    set.records.len(),
                    file.display(),
                    mismatches.len()
                );
            }

            if !mismatches.is_empty() {
                return Err(CliError::Mismatch(mismatches.len()));
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

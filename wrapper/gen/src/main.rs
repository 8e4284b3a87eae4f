//! Wrapper Code Generator
//!
//! Generates Go `Send` wrapper methods from Rust request type declarations.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wrapper_gen::config::GeneratorOptions;
use wrapper_gen::errors::GeneratorError;
use wrapper_gen::loader::load_functions;
use wrapper_gen::output::{DEFAULT_HEADER, generate_and_write};

/// Wrapper code generator - turns request declarations into Send methods
#[derive(Parser, Debug)]
#[command(name = "wrapper-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rust source file declaring `#[returns(...)]` request types
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for generated code
    #[arg(short, long, default_value = "wrapper/send.go")]
    output: PathBuf,

    /// File whose contents are written verbatim before the generated methods
    #[arg(long)]
    header: Option<PathBuf>,

    /// TOML file with generator options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read(path: &Path) -> Result<String, GeneratorError> {
    fs::read_to_string(path).map_err(|e| GeneratorError::ReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// `RUST_LOG` takes precedence over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let options = match &cli.config {
        Some(path) => GeneratorOptions::load(path)?,
        None => GeneratorOptions::default(),
    };
    let header = match &cli.header {
        Some(path) => read(path)?,
        None => DEFAULT_HEADER.to_string(),
    };

    info!(input = %cli.input.display(), "loading declarations");
    let functions = load_functions(&read(&cli.input)?)?;

    generate_and_write(&header, &functions, &options, &cli.output, cli.dry_run)?;

    if !cli.dry_run {
        eprintln!(
            "{} generated {} wrapper(s) to {}",
            "✓".green(),
            functions.len(),
            cli.output.display()
        );
    }

    Ok(())
}

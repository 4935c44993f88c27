//! # bng CLI entry point
//!
//! Parses command-line arguments, initialises logging and dispatches to
//! the conversion handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bng_cli::config::Settings;
use bng_cli::convert::{run_from_osgb36, run_to_osgb36, FromOsgb36Args, ToOsgb36Args};
use bng_cli::output::OutputFormat;
use bng_cli::{EXIT_CONVERSION_FAILED, EXIT_USAGE};

/// Convert between British National Grid references and OSGB36
/// easting/northing coordinates.
#[derive(Parser, Debug)]
#[command(name = "bng", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert grid references (e.g. NT275729) to x y coordinates.
    #[command(name = "to-osgb36")]
    ToOsgb36(ToOsgb36Args),

    /// Convert x,y coordinates to grid references.
    #[command(name = "from-osgb36")]
    FromOsgb36(FromOsgb36Args),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG applies only when no -v flag is given.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let settings = match Settings::resolve(cli.config.as_deref(), cli.format) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(EXIT_USAGE);
        }
    };
    tracing::debug!(?settings, "resolved settings");

    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let mut stderr = std::io::stderr();

    let result = match &cli.command {
        Commands::ToOsgb36(args) => {
            run_to_osgb36(args, &settings, &mut stdin, &mut stdout, &mut stderr)
        }
        Commands::FromOsgb36(args) => {
            run_from_osgb36(args, &settings, &mut stdin, &mut stdout, &mut stderr)
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_CONVERSION_FAILED)
        }
    }
}

//! Van Picker - terminal booking wizard for camper van rentals
//!
//! Loads a rental catalog, walks the user through picking a model and
//! rental dates, and writes the confirmed booking as JSON.

use clap::{Parser, Subcommand};
use vanpick::cli::{CatalogArgs, CliError, ConfigArgs, RunArgs};
use vanpick::constants::APP_BINARY_NAME;
use vanpick::logging;

/// Van Picker - terminal booking wizard for camper van rentals
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive booking wizard
    Run(RunArgs),
    /// List the categories and models in a catalog file
    Catalog(CatalogArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let logging = match cli.command {
        Command::Run(_) => logging::init_file_logging(cli.verbose).map(|_| ()),
        _ => logging::init_stderr_logging(cli.verbose),
    };
    if let Err(e) = logging {
        eprintln!("Warning: logging disabled: {e:#}");
    }

    let result: Result<(), CliError> = match &cli.command {
        Command::Run(args) => args.execute(),
        Command::Catalog(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}

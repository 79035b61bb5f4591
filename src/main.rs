//! Flexcols - responsive column rules without media queries
//!
//! Starts the interactive configurator, or runs a headless command when one
//! is given.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flexcols::cli::{CliError, ConfigArgs, CssArgs};
use flexcols::clipboard::SystemClipboard;
use flexcols::config::Config;
use flexcols::{logging, tui};

/// Flexcols - configure flexbox media-queried columns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs of the interactive session to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rule for a set of breakpoints
    Css(CssArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(command) => {
            logging::init_stderr(cli.verbose)?;
            let result = match &command {
                Command::Css(args) => args.execute(),
                Command::Config(args) => args.execute(),
            };
            if let Err(e) = result {
                exit_with(&e);
            }
            Ok(())
        }
        None => run_interactive(cli.log_file.as_deref(), cli.verbose),
    }
}

fn exit_with(error: &CliError) -> ! {
    eprintln!("Error: {error}");
    std::process::exit(error.exit_code().code());
}

fn run_interactive(log_file: Option<&std::path::Path>, verbose: bool) -> Result<()> {
    if let Some(path) = log_file {
        logging::init_file(path, verbose)?;
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            eprintln!("Starting with default settings.");
            Config::default()
        }
    };

    tracing::info!("Starting interactive session");
    tui::run(config, Box::new(SystemClipboard::new()))
}

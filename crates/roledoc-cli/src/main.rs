//! roledoc CLI
//!
//! Renders the rules of an access-control policy as a markdown table and
//! keeps it up to date inside a markdown document.

mod cli;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use roledoc_blocks::{MarkerPair, SpliceKind};
use roledoc_core::{GenerateOptions, Outcome, generate};

use cli::Cli;
use error::{CliError, Result};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        if let CliError::Core(roledoc_core::Error::Stale { diff, .. }) = &e {
            print!("{diff}");
        }
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = options_from(cli)?;
    tracing::debug!(?options, "resolved options");

    match generate(&options)? {
        Outcome::Rendered(table) => print!("{table}"),
        Outcome::Written { path, kind } => {
            let action = match kind {
                SpliceKind::Created => "Created",
                SpliceKind::Appended => "Appended documentation to",
                SpliceKind::Replaced => "Updated",
            };
            println!("{} {} {}", "OK".green().bold(), action, path.display());
        }
        Outcome::Unchanged { path } => {
            println!(
                "{} {} is up to date",
                "OK".green().bold(),
                path.display()
            );
        }
    }

    Ok(())
}

/// Validate the parsed arguments before any file is read.
fn options_from(cli: Cli) -> Result<GenerateOptions> {
    let input = cli
        .input
        .ok_or_else(|| CliError::usage("missing required --in flag"))?;
    let markers = MarkerPair::new(cli.start_marker, cli.end_marker)?;

    let mut options = GenerateOptions::new(input)
        .with_markers(markers)
        .with_check(cli.check);
    if let Some(output) = cli.output {
        options = options.with_output(output);
    }
    Ok(options)
}

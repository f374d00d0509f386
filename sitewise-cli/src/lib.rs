//! Command-line interface for ranking candidate locations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;

use rank::{RankArgs, run_rank};

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_DATABASE: &str = "database";
pub(crate) const ARG_METHOD: &str = "method";
pub(crate) const ENV_DATASET: &str = "SITEWISE_CMDS_RANK_DATASET";

/// Run the Sitewise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, loading, or
/// output fails. Clap errors (including `--help`) surface as
/// [`CliError::ArgumentParsing`] so the caller can render them.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sitewise",
    about = "Rank candidate locations against weighted criteria",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank every location in a dataset.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;

//! Command-line arguments for the consolidator binary

mod args;

pub use args::CliArgs;

use clap::Parser;

/// Parse the process arguments; clap prints usage and exits on `--help` or bad input
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

use clap::Parser;
use std::process::ExitCode;

use appicon_tools::cli::{self, CliArgs};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    cli::run(args)
}

//! CLI entry point for the montage builder

use clap::Parser;
use montage::io::cli::{Cli, MontageProcessor};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};
use std::process::ExitCode;

// map -v to log level; --quiet wins
fn init_tracing(verbosity: u8, quiet: bool) {
    let level = match (quiet, verbosity) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("montage={level}").parse() {
        filter = filter.add_directive(directive);
    }
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let processor = MontageProcessor::new(cli);
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            error!("Halted due to errors.");
            ExitCode::FAILURE
        }
    }
}

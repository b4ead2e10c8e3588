//! Subcmd generator binary
//!
//! Scans a Rust source file for `+command` doc tags and writes the code that
//! registers the tagged functions with a `subcmd::App`.

use clap::Parser;
use std::process;
use subcmd::cli::{build_logging_config, execute, load_config, Cli};
use subcmd::logging::init_logging;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, Some(&config.logging));
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(input = %cli.input.display(), "subcmd-gen starting");

    if let Err(e) = execute(&cli, &config) {
        error!("Generation failed: {:#}", e);
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

//! CLI of the `subcmd-gen` tool: argument definitions, config assembly and the
//! generate run itself.

use crate::config::{ConfigLoader, GeneratorConfig};
use crate::generate::generate_with;
use crate::logging::LoggingConfig;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// Generate command registrations from `+command` doc tags
#[derive(Parser, Debug)]
#[command(name = "subcmd-gen")]
#[command(about = "Generate command registrations from +command doc tags")]
pub struct Cli {
    /// Output file for the generated source
    #[arg(long, short)]
    pub out: PathBuf,

    /// Rust source file to scan
    pub input: PathBuf,

    /// Configuration file path (overrides subcmd.toml lookup)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path of the dispatcher crate in generated code
    #[arg(long)]
    pub crate_path: Option<String>,

    /// Name of the generated registration routine
    #[arg(long)]
    pub register_fn: Option<String>,

    /// Prefix for action function paths (e.g. "super::")
    #[arg(long)]
    pub action_prefix: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

impl Cli {
    /// Directory searched for `subcmd.toml` when no `--config` is given.
    fn config_dir(&self) -> PathBuf {
        match self.input.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Load the generator config and fold in the CLI overrides.
/// Precedence: CLI flags override environment override config file override defaults.
pub fn load_config(cli: &Cli) -> anyhow::Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigLoader::load(&cli.config_dir())?,
    };

    if let Some(crate_path) = &cli.crate_path {
        config.crate_path = crate_path.clone();
    }
    if let Some(register_fn) = &cli.register_fn {
        config.register_fn = register_fn.clone();
    }
    if let Some(prefix) = &cli.action_prefix {
        config.action_prefix = prefix.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Build logging configuration from CLI args on top of the configured one.
pub fn build_logging_config(cli: &Cli, base: Option<&LoggingConfig>) -> LoggingConfig {
    let mut config = base.cloned().unwrap_or_default();
    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(level) = &cli.log_level {
        config.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.format = format.clone();
    }
    config
}

/// Scan `cli.input` and write the registration source to `cli.out`.
///
/// The output file is only written once generation succeeded.
pub fn execute(cli: &Cli, config: &GeneratorConfig) -> anyhow::Result<()> {
    let mut code = Vec::new();
    generate_with(&mut code, &cli.input, None, &config.emit_options())?;
    write_output(&cli.out, &code)?;
    info!(
        input = %cli.input.display(),
        out = %cli.out.display(),
        "Wrote command registrations"
    );
    Ok(())
}

fn write_output(path: &Path, code: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, code).with_context(|| format!("writing {}", path.display()))
}

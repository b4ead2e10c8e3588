//! Configuration System
//!
//! Settings for the registration generator tool, layered from built-in
//! defaults, an optional `subcmd.toml` and `SUBCMD_GEN_*` environment variables.

use crate::error::ConfigError;
use crate::generate::EmitOptions;
use crate::logging::LoggingConfig;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the optional config file looked up by [`ConfigLoader::load`].
pub const CONFIG_FILE_NAME: &str = "subcmd.toml";

/// Generator tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Path of the dispatcher crate in generated code
    #[serde(default = "default_crate_path")]
    pub crate_path: String,

    /// Name of the generated registration routine
    #[serde(default = "default_register_fn")]
    pub register_fn: String,

    /// Prefix for action function paths, e.g. "super::"
    #[serde(default)]
    pub action_prefix: String,

    /// Header comment at the top of generated files
    #[serde(default = "default_header")]
    pub header: String,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_crate_path() -> String {
    "subcmd".to_string()
}

fn default_register_fn() -> String {
    "register_commands".to_string()
}

fn default_header() -> String {
    "// auto-generated file".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            crate_path: default_crate_path(),
            register_fn: default_register_fn(),
            action_prefix: String::new(),
            header: default_header(),
            logging: LoggingConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check that the code generation settings produce valid Rust.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if syn::parse_str::<syn::Ident>(&self.register_fn).is_err() {
            return Err(ConfigError::Invalid(format!(
                "register_fn '{}' is not a valid identifier",
                self.register_fn
            )));
        }
        if syn::parse_str::<syn::Path>(&self.crate_path).is_err() {
            return Err(ConfigError::Invalid(format!(
                "crate_path '{}' is not a valid path",
                self.crate_path
            )));
        }
        if !self.action_prefix.is_empty() {
            let valid = self
                .action_prefix
                .strip_suffix("::")
                .is_some_and(|base| syn::parse_str::<syn::Path>(base).is_ok());
            if !valid {
                return Err(ConfigError::Invalid(format!(
                    "action_prefix '{}' must be a path ending in '::'",
                    self.action_prefix
                )));
            }
        }
        if !self.header.trim_start().starts_with("//") {
            return Err(ConfigError::Invalid(
                "header must be a line comment".to_string(),
            ));
        }
        Ok(())
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            crate_path: self.crate_path.clone(),
            register_fn: self.register_fn.clone(),
            action_prefix: self.action_prefix.clone(),
            header: self.header.clone(),
        }
    }
}

/// Loads [`GeneratorConfig`] from its layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then `<dir>/subcmd.toml` if present, then the environment.
    pub fn load(dir: &Path) -> Result<GeneratorConfig, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        let mut builder = builder_with_defaults()?;
        if path.exists() {
            debug!(config_path = %path.display(), "Loading config file");
            builder = builder.add_source(File::from(path).required(false));
        }
        Self::finish(builder)
    }

    /// Defaults, then the given file (which must exist), then the environment.
    pub fn load_from_file(path: &Path) -> Result<GeneratorConfig, ConfigError> {
        debug!(config_path = %path.display(), "Loading config file");
        let builder = builder_with_defaults()?.add_source(File::from(PathBuf::from(path)));
        Self::finish(builder)
    }

    fn finish(
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<GeneratorConfig, ConfigError> {
        let config: GeneratorConfig = builder
            .add_source(
                Environment::with_prefix("SUBCMD_GEN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

/// Create a Config builder with the defaults applied.
fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Ok(Config::builder()
        .set_default("crate_path", default_crate_path())?
        .set_default("register_fn", default_register_fn())?
        .set_default("action_prefix", "")?
        .set_default("header", default_header())?)
}

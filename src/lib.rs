//! Subcmd: sub-command dispatch for command-line programs
//!
//! An [`App`] maps command names to [`Command`]s, resolves the argument vector
//! to a command plus its residual arguments, runs the command's action and
//! turns the outcome into an exit code. The [`generate`] module writes the
//! registration code for functions documented with `+command` tags.

pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod default;
pub mod error;
pub mod flags;
pub mod generate;
pub mod logging;
pub mod output;
pub mod usage;

pub use app::{exit_code, App, MAIN_COMMAND};
pub use command::{Action, ActionResult, Command};
pub use default::{dispatch, run, use_command, with_default};
pub use error::{ActionError, ErrorKind};
pub use flags::{FlagSet, Flags};
pub use output::Output;

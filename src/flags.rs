//! Flag parsing context handed to every command action.
//!
//! A [`FlagSet`] collects flag declarations made inside the action, then parses
//! the residual arguments with `clap`. Parsing stops at the first positional
//! argument (or `--`); everything from there on is available through
//! [`Flags::args`].

use crate::error::ActionError;
use crate::output::Output;
use clap::{Arg, ArgAction, ArgMatches};
use std::io::{self, Write};
use tracing::{debug, warn};

// Internal ids start with NUL so they never collide with a declared flag name.
const HELP_ID: &str = "\u{0}help";
const ARGS_ID: &str = "\u{0}args";

/// Usage callback installed on a flag set.
pub type UsageFn = Box<dyn Fn(&FlagSet, &mut dyn Write) -> io::Result<()>>;

/// Flag declarations and usage hook for one command invocation.
///
/// One-character names become short flags (`-v`); longer names become long
/// flags (`--from`). `-h`/`--help` is reserved. A flag that clashes with the
/// help flag or with an earlier declaration is not added; [`FlagSet::parse`]
/// then fails with the reason.
pub struct FlagSet {
    name: String,
    args: Vec<Arg>,
    rejected: Vec<String>,
    output: Output,
    usage: Option<UsageFn>,
}

impl FlagSet {
    pub fn new(name: impl Into<String>, output: Output) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            rejected: Vec::new(),
            output,
            usage: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stream usage text and diagnostics are written to.
    pub fn output(&self) -> Output {
        self.output.clone()
    }

    /// Declare a boolean switch.
    pub fn bool(&mut self, name: &str, usage: &str) -> &mut Self {
        self.arg(
            flag_arg(name)
                .action(ArgAction::SetTrue)
                .help(usage.to_string()),
        )
    }

    /// Declare a string-valued flag. An empty default means "no default".
    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> &mut Self {
        let mut arg = flag_arg(name)
            .action(ArgAction::Set)
            .value_name(name.to_uppercase())
            .help(usage.to_string());
        if !default.is_empty() {
            arg = arg.default_value(default.to_string());
        }
        self.arg(arg)
    }

    /// Declare an integer-valued flag.
    pub fn int(&mut self, name: &str, default: i64, usage: &str) -> &mut Self {
        self.arg(
            flag_arg(name)
                .action(ArgAction::Set)
                .value_name(name.to_uppercase())
                .value_parser(clap::value_parser!(i64))
                .default_value(default.to_string())
                .help(usage.to_string()),
        )
    }

    /// Declare an arbitrary clap argument.
    pub fn arg(&mut self, arg: Arg) -> &mut Self {
        match self.conflict(&arg) {
            Some(reason) => {
                warn!(flags = %self.name, reason = %reason, "Flag declaration rejected");
                self.rejected.push(reason);
            }
            None => self.args.push(arg),
        }
        self
    }

    fn conflict(&self, arg: &Arg) -> Option<String> {
        let id = arg.get_id().as_str();
        if arg.get_short().is_none() && arg.get_long().is_none() {
            return Some(format!("flag {id} has neither a short nor a long name"));
        }
        if arg.get_short() == Some('h') || arg.get_long() == Some("help") {
            return Some(format!("flag {id} is reserved for help"));
        }
        let redefined = self.args.iter().any(|existing| {
            existing.get_id() == arg.get_id()
                || (arg.get_short().is_some() && existing.get_short() == arg.get_short())
                || (arg.get_long().is_some() && existing.get_long() == arg.get_long())
        });
        redefined.then(|| format!("flag redefined: {id}"))
    }

    /// Whether any flag has been declared. The built-in help flag does not count.
    pub fn has_flags(&self) -> bool {
        !self.args.is_empty()
    }

    /// Listing of every declared flag with its description and default value.
    pub fn defaults(&self) -> String {
        let mut command = self.command().help_template("{options}");
        let rendered = command.render_help().to_string();
        rendered.trim_end().to_string()
    }

    /// Write [`FlagSet::defaults`] to `w`.
    pub fn print_defaults(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}", self.defaults())
    }

    /// Replace the usage callback invoked on `-h` and on malformed input.
    pub fn set_usage<F>(&mut self, usage: F)
    where
        F: Fn(&FlagSet, &mut dyn Write) -> io::Result<()> + 'static,
    {
        self.usage = Some(Box::new(usage));
    }

    /// Run the usage callback against the output stream.
    pub fn usage(&self) {
        let mut out = self.output.clone();
        let result = match &self.usage {
            Some(usage) => usage(self, &mut out),
            None => self.default_usage(&mut out),
        };
        if let Err(e) = result {
            warn!(flags = %self.name, error = %e, "Failed to write usage");
        }
    }

    fn default_usage(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "Usage of {}:", self.name)?;
        self.print_defaults(w)
    }

    /// Parse `args` against the declared flags.
    ///
    /// A help request runs the usage callback and yields
    /// [`ActionError::HelpRequested`]. Malformed input runs the usage callback
    /// and yields [`ActionError::Other`] carrying the parser's message, which is
    /// also written to the output ahead of the usage text. A repeated flag keeps
    /// its last value.
    pub fn parse(&self, args: &[String]) -> Result<Flags, ActionError> {
        if let Some(reason) = self.rejected.first() {
            return Err(ActionError::Other(reason.clone()));
        }
        match self.command().try_get_matches_from(args) {
            Ok(matches) => {
                if matches.get_flag(HELP_ID) {
                    debug!(flags = %self.name, "Help requested");
                    self.usage();
                    return Err(ActionError::HelpRequested);
                }
                Ok(Flags { matches })
            }
            Err(err) => {
                let message = parse_error_message(&err);
                debug!(flags = %self.name, error = %message, "Flag parsing failed");
                let mut out = self.output.clone();
                if let Err(e) = writeln!(out, "{}", message) {
                    warn!(flags = %self.name, error = %e, "Failed to write parse error");
                }
                self.usage();
                Err(ActionError::Other(message))
            }
        }
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(self.name.clone())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true)
            .args(self.args.iter().cloned())
            .arg(
                Arg::new(HELP_ID)
                    .short('h')
                    .long("help")
                    .action(ArgAction::SetTrue)
                    .hide(true),
            )
            .arg(
                Arg::new(ARGS_ID)
                    .action(ArgAction::Append)
                    .num_args(1..)
                    .value_name("ARGS")
                    .trailing_var_arg(true)
                    .hide(true),
            )
    }
}

impl std::fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlagSet")
            .field("name", &self.name)
            .field("flags", &self.args.len())
            .field("output", &self.output)
            .finish()
    }
}

fn flag_arg(name: &str) -> Arg {
    let arg = Arg::new(name.to_string());
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => arg.short(c),
        _ => arg.long(name.to_string()),
    }
}

fn parse_error_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// Parsed flag values plus the positional remainder.
#[derive(Debug, Clone)]
pub struct Flags {
    matches: ArgMatches,
}

impl Flags {
    pub fn get_bool(&self, name: &str) -> bool {
        self.matches
            .try_get_one::<bool>(name)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    }

    pub fn get_string(&self, name: &str) -> Option<String> {
        self.matches
            .try_get_one::<String>(name)
            .ok()
            .flatten()
            .cloned()
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.matches.try_get_one::<i64>(name).ok().flatten().copied()
    }

    /// Arguments left over after flag parsing.
    pub fn args(&self) -> Vec<String> {
        self.matches
            .try_get_many::<String>(ARGS_ID)
            .ok()
            .flatten()
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }
}

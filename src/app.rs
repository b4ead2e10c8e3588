//! Command registry and dispatcher.

use crate::command::{ActionResult, Command};
use crate::error::{ActionError, ErrorKind};
use crate::flags::FlagSet;
use crate::output::Output;
use crate::usage;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{debug, warn};

/// Name under which the no-sub-command action is registered.
pub const MAIN_COMMAND: &str = "";

/// Process terminate hook used by [`App::run`].
pub type ExitFn = Box<dyn Fn(i32)>;

/// A CLI program: its name, its commands and the diagnostic stream.
pub struct App {
    name: String,
    commands: BTreeMap<String, Command>,
    output: Output,
    exit: ExitFn,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: BTreeMap::new(),
            output: Output::stderr(),
            exit: Box::new(terminate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Stream for usage text and error messages (stderr by default).
    pub fn output(&self) -> Output {
        self.output.clone()
    }

    pub fn set_output(&mut self, output: Output) {
        self.output = output;
    }

    /// Replace the terminate operation used by [`App::run`].
    pub fn set_exit<F>(&mut self, exit: F)
    where
        F: Fn(i32) + 'static,
    {
        self.exit = Box::new(exit);
    }

    /// Register a command. A later command with the same name replaces the earlier one.
    pub fn use_command(&mut self, command: Command) {
        debug!(command = %command.name(), "Registering command");
        self.commands.insert(command.name().to_string(), command);
    }

    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Registered commands, sorted by name.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    /// Pick the command handling `args` and the arguments it receives.
    ///
    /// An empty vector, or one starting with a flag, goes to the main command
    /// unchanged. A known command name is consumed. An unknown first token also
    /// goes to the main command, with `args` left intact so the main action can
    /// decide what to make of it.
    pub fn resolve<'a>(&self, args: &'a [String]) -> Option<(&Command, &'a [String])> {
        let main = || self.commands.get(MAIN_COMMAND).map(|cmd| (cmd, args));

        match args.first() {
            None => main(),
            Some(first) if first.starts_with('-') => main(),
            Some(first) => match self.commands.get(first.as_str()) {
                Some(cmd) => Some((cmd, &args[1..])),
                None => main(),
            },
        }
    }

    /// Resolve and run a command, returning the action's outcome.
    ///
    /// When no command can handle `args` the program usage is printed and
    /// [`ActionError::Usage`] returned. When the action itself returns
    /// [`ActionError::Usage`], the command usage is printed.
    pub fn dispatch(&self, args: &[String]) -> ActionResult {
        let Some((command, rest)) = self.resolve(args) else {
            debug!(args = ?args, "No command matches arguments");
            self.print_usage();
            return Err(ActionError::Usage);
        };
        debug!(command = %command.name(), args = ?rest, "Dispatching command");

        let mut flags = FlagSet::new(command.name(), self.output.clone());
        let listing = command
            .is_main()
            .then(|| usage::command_list(self.commands.values()));
        let long = command.long().to_string();
        flags.set_usage(move |flags, w| {
            writeln!(w, "{}", usage::long_usage(&long, Some(flags)))?;
            if let Some(listing) = &listing {
                w.write_all(listing.as_bytes())?;
            }
            Ok(())
        });

        let result = command.invoke(&mut flags, rest);
        if matches!(result, Err(ActionError::Usage)) {
            flags.usage();
        }
        result
    }

    /// Entry point of the program: dispatch `args`, then terminate with the
    /// exit code for the outcome. Unexpected errors are printed first.
    pub fn run(&self, args: &[String]) {
        let result = self.dispatch(args);
        if let Err(ActionError::Other(message)) = &result {
            let mut out = self.output.clone();
            if let Err(e) = writeln!(out, "{}", message) {
                warn!(error = %e, "Failed to write error message");
            }
        }
        let code = exit_code(&result);
        debug!(code, "Exiting");
        (self.exit)(code);
    }

    /// Print the program usage line and the command list.
    pub fn print_usage(&self) {
        let mut out = self.output.clone();
        if let Err(e) = usage::write_program_usage(&mut out, &self.name, self.commands.values()) {
            warn!(error = %e, "Failed to write program usage");
        }
    }

    /// Program usage as a string.
    pub fn usage(&self) -> String {
        usage::program_usage(&self.name, self.commands.values())
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("name", &self.name)
            .field("commands", &self.commands)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

fn terminate(code: i32) {
    std::process::exit(code)
}

/// Exit code for an action outcome: 0 on success, 2 for usage errors and help
/// requests, 1 for anything else.
pub fn exit_code(result: &ActionResult) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => match err.kind() {
            ErrorKind::UsageError | ErrorKind::HelpRequested => 2,
            ErrorKind::Other => 1,
        },
    }
}

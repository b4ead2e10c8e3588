//! Command definitions.

use crate::error::ActionError;
use crate::flags::FlagSet;

/// Result of running a command action.
pub type ActionResult = Result<(), ActionError>;

/// The implementation of a command.
///
/// The action receives an empty [`FlagSet`] scoped to the command, declares its
/// flags, and parses the residual arguments with [`FlagSet::parse`] itself.
/// Return [`ActionError::Usage`] to have the command usage shown.
pub type Action = Box<dyn Fn(&mut FlagSet, &[String]) -> ActionResult>;

/// One command of an [`App`](crate::App), identified by its name.
///
/// The empty name is reserved for the action that runs when no sub-command is
/// given.
pub struct Command {
    name: String,
    short: String,
    long: String,
    action: Action,
}

impl Command {
    /// `short` is the one-line description shown in the command list. The first
    /// line of `long` should be a usage line starting with the command name.
    pub fn new<F>(
        name: impl Into<String>,
        action: F,
        short: impl Into<String>,
        long: impl Into<String>,
    ) -> Self
    where
        F: Fn(&mut FlagSet, &[String]) -> ActionResult + 'static,
    {
        Self {
            name: name.into(),
            short: short.into(),
            long: long.into(),
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn long(&self) -> &str {
        &self.long
    }

    /// Whether this is the no-sub-command action.
    pub fn is_main(&self) -> bool {
        self.name.is_empty()
    }

    pub(crate) fn invoke(&self, flags: &mut FlagSet, args: &[String]) -> ActionResult {
        (self.action)(flags, args)
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("long", &self.long)
            .finish_non_exhaustive()
    }
}

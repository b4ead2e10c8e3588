//! Usage text for the whole program and for single commands.

use crate::command::Command;
use crate::flags::FlagSet;
use std::io::{self, Write};
use tabwriter::TabWriter;

/// Label shown in the command list for the no-sub-command action.
pub const MAIN_LABEL: &str = "<no command>";

/// Write the program usage line followed by the command list.
pub fn write_program_usage<'a, W, I>(w: &mut W, program: &str, commands: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Command>,
{
    write!(w, "Usage: {} <command> [<args>]\n\n", program)?;
    write_command_list(w, commands)
}

/// Write the `Commands:` section, one line per command sorted by name, with
/// short descriptions aligned on a tab stop.
pub fn write_command_list<'a, W, I>(w: &mut W, commands: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Command>,
{
    writeln!(w, "Commands:")?;

    let mut commands: Vec<&Command> = commands.into_iter().collect();
    commands.sort_by(|a, b| a.name().cmp(b.name()));

    let mut tw = TabWriter::new(w).minwidth(0).padding(4);
    for command in commands {
        let label = if command.is_main() {
            MAIN_LABEL
        } else {
            command.name()
        };
        writeln!(tw, "    {}\t{}", label, command.short())?;
    }
    tw.flush()
}

/// Program usage as a string.
pub fn program_usage<'a, I>(program: &str, commands: I) -> String
where
    I: IntoIterator<Item = &'a Command>,
{
    let mut buf = Vec::new();
    // Writes into a Vec cannot fail.
    let _ = write_program_usage(&mut buf, program, commands);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Command list section as a string.
pub fn command_list<'a, I>(commands: I) -> String
where
    I: IntoIterator<Item = &'a Command>,
{
    let mut buf = Vec::new();
    let _ = write_command_list(&mut buf, commands);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Usage of a single command: `Usage: <long>`, plus an `Options:` section when
/// the flag set declares any flags.
pub fn command_usage(command: &Command, flags: Option<&FlagSet>) -> String {
    long_usage(command.long(), flags)
}

/// [`command_usage`] from a bare long description.
pub fn long_usage(long: &str, flags: Option<&FlagSet>) -> String {
    let usage = format!("Usage: {}", long);

    match flags {
        Some(flags) if flags.has_flags() => {
            format!("{}\n\nOptions:\n{}", usage, flags.defaults())
        }
        _ => usage,
    }
}

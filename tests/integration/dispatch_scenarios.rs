//! Integration tests for dispatch, usage output and exit codes.

use std::cell::Cell;
use std::rc::Rc;
use subcmd::{ActionError, App, Command, Output};

struct Harness {
    app: App,
    out: Output,
    code: Rc<Cell<i32>>,
}

impl Harness {
    fn new() -> Self {
        let out = Output::memory();
        let code = Rc::new(Cell::new(-1));
        let mut app = App::new("prog");
        app.set_output(out.clone());
        let sink = Rc::clone(&code);
        app.set_exit(move |c| sink.set(c));
        Self { app, out, code }
    }

    /// Run `args` and return (diagnostic output, exit code).
    fn run(&self, args: &[&str]) -> (String, i32) {
        self.out.clear();
        self.code.set(-1);
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        self.app.run(&args);
        (self.out.contents().unwrap_or_default(), self.code.get())
    }
}

const CMD1_LONG: &str = "cmd1\n\nblah\nblah\nblah\n";

fn usage_harness() -> Harness {
    let mut harness = Harness::new();
    harness.app.use_command(Command::new(
        "cmd1",
        |_, _| Err(ActionError::Usage),
        "blah blah blah",
        CMD1_LONG,
    ));
    harness.app.use_command(Command::new(
        "cmd2",
        |flags, args| {
            flags
                .bool("v", "set verbosity")
                .string("from", "", "specify from")
                .string("to", "", "specify to");
            flags.parse(args)?;
            Ok(())
        },
        "xyz",
        "cmd2 [-v] --from <from> --to <to>",
    ));
    harness.app.use_command(Command::new(
        "cmd3",
        |_, _| Err(ActionError::other("internal error")),
        "",
        "",
    ));
    harness
}

#[test]
fn test_no_args_without_main_prints_program_usage() {
    let harness = usage_harness();
    let (out, code) = harness.run(&[]);
    assert!(
        out.starts_with("Usage: prog <command> [<args>]\n\n"),
        "should begin with program usage line:\n{out}"
    );
    assert!(out.contains("Commands:\n"));
    assert!(out.contains("cmd1"));
    assert!(out.contains("cmd2"));
    assert!(out.contains("cmd3"));
    assert_eq!(code, 2);
}

#[test]
fn test_usage_error_prints_long_description() {
    let harness = usage_harness();
    let (out, code) = harness.run(&["cmd1"]);
    assert!(out.contains(CMD1_LONG), "should include long description:\n{out}");
    assert!(out.starts_with("Usage: cmd1\n"));
    assert!(!out.contains("Commands:"), "sub-command usage has no command list");
    assert_eq!(code, 2);
}

#[test]
fn test_help_flag_lists_options() {
    let harness = usage_harness();
    let (out, code) = harness.run(&["cmd2", "-h"]);
    assert!(out.starts_with("Usage: cmd2 [-v] --from <from> --to <to>\n\nOptions:\n"), "{out}");
    for description in ["set verbosity", "specify from", "specify to"] {
        assert!(out.contains(description), "should include flag specs:\n{out}");
    }
    assert_eq!(code, 2);
}

#[test]
fn test_successful_flag_parse_exits_zero() {
    let harness = usage_harness();
    let (out, code) = harness.run(&["cmd2", "-v", "--from", "a", "--to", "b"]);
    assert_eq!(out, "");
    assert_eq!(code, 0);
}

#[test]
fn test_unexpected_error_is_printed_and_exits_one() {
    let harness = usage_harness();
    let (out, code) = harness.run(&["cmd3"]);
    assert_eq!(out, "internal error\n");
    assert_eq!(code, 1);
}

#[test]
fn test_malformed_flags_exit_one_with_message() {
    let harness = usage_harness();
    let (out, code) = harness.run(&["cmd2", "--bogus"]);
    assert!(out.contains("set verbosity"), "usage is shown:\n{out}");
    assert!(out.contains("--bogus"), "parser message is shown:\n{out}");
    assert_eq!(code, 1);
}

#[test]
fn test_unknown_command_without_main_prints_program_usage() {
    let harness = usage_harness();
    let (out, code) = harness.run(&["cmdX", "-h"]);
    assert!(
        out.starts_with("Usage: prog <command> [<args>]\n"),
        "should begin with program usage line:\n{out}"
    );
    assert_eq!(code, 2);
}

#[test]
fn test_unknown_command_goes_to_main_with_all_args() {
    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut harness = Harness::new();
    let recorder = Rc::clone(&seen);
    harness.app.use_command(Command::new(
        "",
        move |_, args| {
            recorder.borrow_mut().extend_from_slice(args);
            Ok(())
        },
        "default action",
        "prog [<file>...]",
    ));
    harness
        .app
        .use_command(Command::new("known", |_, _| Ok(()), "", ""));

    let (_, code) = harness.run(&["cmdX", "a"]);
    assert_eq!(code, 0);
    assert_eq!(*seen.borrow(), vec!["cmdX".to_string(), "a".to_string()]);
}

#[test]
fn test_main_help_appends_command_list() {
    let mut harness = Harness::new();
    harness.app.use_command(Command::new(
        "",
        |flags, args| {
            flags.bool("q", "be quiet");
            flags.parse(args)?;
            Ok(())
        },
        "default action",
        "prog [-q]",
    ));
    harness
        .app
        .use_command(Command::new("sync", |_, _| Ok(()), "sync things", "sync"));

    let (out, code) = harness.run(&["-h"]);
    assert!(out.starts_with("Usage: prog [-q]\n\nOptions:\n"), "{out}");
    assert!(out.contains("be quiet"));
    let list = out.find("Commands:\n").expect("command list appended");
    assert!(out[list..].contains("<no command>"));
    assert!(out[list..].contains("sync things"));
    assert_eq!(code, 2);
}

#[test]
fn test_dispatch_returns_outcome_without_exiting() {
    let harness = usage_harness();
    let args = vec!["cmd3".to_string()];
    assert_eq!(
        harness.app.dispatch(&args),
        Err(ActionError::Other("internal error".to_string()))
    );
    assert_eq!(harness.code.get(), -1, "dispatch must not terminate");
    assert_eq!(harness.out.contents().unwrap(), "", "dispatch does not print other errors");
}

//! Property-based tests for program usage rendering

use proptest::prelude::*;
use std::collections::BTreeSet;
use subcmd::{App, Command};

/// Usage starts with the program line and lists every command in name order
#[test]
fn test_program_usage_lists_sorted_commands() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                "[a-z]{1,10}",
                prop::collection::btree_set("[a-z][a-z0-9-]{0,12}", 0..8),
            ),
            |(program, names)| {
                let mut app = App::new(program.clone());
                for name in names.iter().rev() {
                    app.use_command(Command::new(name.clone(), |_, _| Ok(()), "short", ""));
                }

                let text = app.usage();
                let header = format!("Usage: {} <command> [<args>]\n\nCommands:\n", program);
                prop_assert!(text.starts_with(&header));

                let listed: Vec<String> = text[header.len()..]
                    .lines()
                    .map(|line| line.split_whitespace().next().unwrap_or("").to_string())
                    .collect();
                let expected: Vec<String> = names.iter().cloned().collect();
                prop_assert_eq!(listed, expected);
                Ok(())
            },
        )
        .unwrap();
}

/// Re-registering a name never duplicates it in the listing
#[test]
fn test_registration_is_last_wins() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &prop::collection::vec("[a-c]{1,2}", 1..12),
            |names| {
                let mut app = App::new("prog");
                for (i, name) in names.iter().enumerate() {
                    app.use_command(Command::new(name.clone(), |_, _| Ok(()), i.to_string(), ""));
                }

                let unique: BTreeSet<&String> = names.iter().collect();
                prop_assert_eq!(app.commands().count(), unique.len());
                for name in unique {
                    let last = names.iter().rposition(|n| n == name).unwrap();
                    let short = last.to_string();
                    prop_assert_eq!(app.command(name).unwrap().short(), short.as_str());
                }
                Ok(())
            },
        )
        .unwrap();
}

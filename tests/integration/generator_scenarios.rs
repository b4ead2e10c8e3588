//! Integration tests for the doc-comment registration generator.

use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use subcmd::generate::{generate, generate_with, scan, EmitOptions, TagKind};

const COUNTER: &str = r#"
use subcmd::{ActionResult, FlagSet};

/// +command up - count up!
///
/// up [-f <from>] <count>
///
/// Counts up...
fn action_up(_flags: &mut FlagSet, _args: &[String]) -> ActionResult {
    Ok(())
}

/// +command down
///
/// down <count>
fn action_down(_flags: &mut FlagSet, _args: &[String]) -> ActionResult {
    Ok(())
}
"#;

fn demo_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("counter")
}

#[test]
fn test_command_tag_becomes_registration() {
    let tags = scan(Path::new("counter.rs"), Some(COUNTER)).unwrap();
    assert_eq!(tags.len(), 1, "tag without short description is skipped");

    let up = &tags[0];
    assert_eq!(up.kind, TagKind::Command);
    assert_eq!(up.command_name(), "up");
    assert_eq!(up.short, "count up!");
    assert!(up.long.starts_with("up [-f <from>] <count>"));
    assert_eq!(up.long, "up [-f <from>] <count>\n\nCounts up...");
}

#[test]
fn test_generated_file_layout() {
    let mut out = Vec::new();
    generate(&mut out, "counter.rs", Some(COUNTER)).unwrap();
    let expected = r#"// auto-generated file

pub fn register_commands(app: &mut subcmd::App) {
    app.use_command(subcmd::Command::new(
        "up",
        action_up,
        "count up!",
        "up [-f <from>] <count>\n\nCounts up...",
    ));
}
"#;
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_main_tag_registers_empty_name() {
    let src = r#"
/// +main - run without a sub-command
///
/// prog [-q] <file>
fn run_main(_f: &mut subcmd::FlagSet, _a: &[String]) -> subcmd::ActionResult { Ok(()) }
"#;
    let mut out = Vec::new();
    generate(&mut out, "main.rs", Some(src)).unwrap();
    let code = String::from_utf8(out).unwrap();
    assert!(code.contains(
        "        \"\",\n        run_main,\n        \"run without a sub-command\",\n        \"prog [-q] <file>\",\n"
    ));
}

#[test]
fn test_no_tags_produces_empty_routine() {
    let mut out = Vec::new();
    generate(&mut out, "plain.rs", Some("fn helper() {}\n")).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "// auto-generated file\n\npub fn register_commands(_app: &mut subcmd::App) {}\n"
    );
}

#[test]
fn test_generated_code_is_valid_rust() {
    let options = EmitOptions {
        action_prefix: "super::".to_string(),
        ..EmitOptions::default()
    };
    let mut out = Vec::new();
    generate_with(&mut out, "counter.rs", Some(COUNTER), &options).unwrap();
    let code = String::from_utf8(out).unwrap();
    let file = syn::parse_file(&code).unwrap();
    assert_eq!(file.items.len(), 1);
    assert!(code.contains("super::action_up"));
}

#[test]
fn test_reads_source_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("counter.rs");
    std::fs::write(&path, COUNTER).unwrap();

    let mut from_file = Vec::new();
    generate(&mut from_file, &path, None).unwrap();
    let mut from_src = Vec::new();
    generate(&mut from_src, &path, Some(COUNTER)).unwrap();
    assert_eq!(from_file, from_src);
}

#[test]
fn test_demo_registrations_are_up_to_date() {
    let dir = demo_dir();
    let mut out = Vec::new();
    generate(&mut out, dir.join("main.rs"), None).unwrap();
    let checked_in = std::fs::read_to_string(dir.join("commands.rs")).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), checked_in);
}

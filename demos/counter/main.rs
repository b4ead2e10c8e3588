//! Counter demo: commands registered from their doc tags.
//!
//! `commands.rs` is produced by the generator; refresh it after editing the
//! tags below with
//!
//! ```text
//! cargo run --bin subcmd-gen -- --out demos/counter/commands.rs demos/counter/main.rs
//! ```

use subcmd::{ActionError, ActionResult, FlagSet};

include!("commands.rs");

fn main() {
    let mut app = subcmd::App::new("counter");
    register_commands(&mut app);

    let args: Vec<String> = std::env::args().skip(1).collect();
    app.run(&args);
}

/// +command up - count up!
///
///     up [-f <from>] <count>
///
/// Counts up to specified count. If -f flag was specified, counting starts with
/// that number.
fn action_up(flags: &mut FlagSet, args: &[String]) -> ActionResult {
    flags.int("f", 1, "count starts from this number");
    let parsed = flags.parse(args)?;

    let rest = parsed.args();
    let Some(count) = rest.first() else {
        return Err(ActionError::Usage);
    };
    let count: i64 = count.parse()?;
    let from = parsed.get_int("f").unwrap_or(1);

    for i in from..=count {
        println!("count: {}", i);
    }
    Ok(())
}

/// +command smile - show smile
///
///     smile
///
/// Shows smile.
///
/// NOTE: as this action does not parse its flags, passing -h to this command
/// does not show the help.
fn action_smile(_flags: &mut FlagSet, _args: &[String]) -> ActionResult {
    println!("( ╹◡╹)");
    Ok(())
}

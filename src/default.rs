//! Process-wide default [`App`] for programs that do not build their own.
//!
//! Nothing else in the crate touches this instance. Its name is the file name
//! of the running executable and it writes diagnostics to stderr.

use crate::app::App;
use crate::command::{ActionResult, Command};
use std::cell::RefCell;
use std::path::Path;

thread_local! {
    static DEFAULT: RefCell<App> = RefCell::new(App::new(program_name()));
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}

/// Run `f` with mutable access to the default app, e.g. to change its name or
/// output, or to hand it to a generated registration routine.
///
/// Must not be called from inside a command action dispatched by the default app.
pub fn with_default<R>(f: impl FnOnce(&mut App) -> R) -> R {
    DEFAULT.with(|app| f(&mut app.borrow_mut()))
}

/// Register a command on the default app.
pub fn use_command(command: Command) {
    with_default(|app| app.use_command(command));
}

/// [`App::dispatch`] on the default app.
pub fn dispatch(args: &[String]) -> ActionResult {
    DEFAULT.with(|app| app.borrow().dispatch(args))
}

/// [`App::run`] on the default app.
pub fn run(args: &[String]) {
    DEFAULT.with(|app| app.borrow().run(args))
}

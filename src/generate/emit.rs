//! Rendering of the registration source file.

use super::tag::DocTag;

/// Knobs for the emitted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Path of the dispatcher crate, e.g. `subcmd`.
    pub crate_path: String,
    /// Name of the generated registration routine.
    pub register_fn: String,
    /// Prepended to every action function name, e.g. `super::`.
    pub action_prefix: String,
    /// First line(s) of the file.
    pub header: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            crate_path: "subcmd".to_string(),
            register_fn: "register_commands".to_string(),
            action_prefix: String::new(),
            header: "// auto-generated file".to_string(),
        }
    }
}

/// Render a source file with one routine registering every tag, in order.
pub fn render(tags: &[DocTag], options: &EmitOptions) -> String {
    let param = if tags.is_empty() { "_app" } else { "app" };

    let mut body = String::new();
    for tag in tags {
        body.push_str(&format!(
            "    app.use_command({krate}::Command::new(\n        {name},\n        {prefix}{function},\n        {short},\n        {long},\n    ));\n",
            krate = options.crate_path,
            name = quote(tag.command_name()),
            prefix = options.action_prefix,
            function = tag.function,
            short = quote(&tag.short),
            long = quote(&tag.long),
        ));
    }
    if !body.is_empty() {
        body.insert(0, '\n');
    }

    format!(
        "{header}\n\npub fn {register}({param}: &mut {krate}::App) {{{body}}}\n",
        header = options.header.trim_end(),
        register = options.register_fn,
        krate = options.crate_path,
    )
}

/// Rust string literal for `value`.
fn quote(value: &str) -> String {
    format!("{:?}", value)
}

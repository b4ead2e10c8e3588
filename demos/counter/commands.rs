// auto-generated file

pub fn register_commands(app: &mut subcmd::App) {
    app.use_command(subcmd::Command::new(
        "up",
        action_up,
        "count up!",
        "up [-f <from>] <count>\n\nCounts up to specified count. If -f flag was specified, counting starts with\nthat number.",
    ));
    app.use_command(subcmd::Command::new(
        "smile",
        action_smile,
        "show smile",
        "smile\n\nShows smile.\n\nNOTE: as this action does not parse its flags, passing -h to this command\ndoes not show the help.",
    ));
}

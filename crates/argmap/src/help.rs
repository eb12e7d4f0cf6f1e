//! Default help rendering.

use crate::ArgsParser;
use crate::argument::Argument;
use crate::command::Command;
use crate::registry::Registry;

/// Left column width cap; longer labels push their description out instead.
const MAX_LABEL_WIDTH: usize = 40;

/// `(label, description)` for every argument, in the given order.
pub fn help_rows(args: &[Argument]) -> Vec<(String, String)> {
    args.iter().map(Argument::help_pair).collect()
}

fn label_width(rows: &[(String, String)]) -> usize {
    rows.iter()
        .map(|(l, _)| l.len())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH)
}

/// Render the argument table, opening a `Subcommands:` section at the first
/// command.
fn render_args(out: &mut String, args: &[Argument], indent: &str) {
    let rows = help_rows(args);
    let width = label_width(&rows);
    let first_command = args.iter().position(Argument::is_command);

    for (i, (left, right)) in rows.iter().enumerate() {
        if Some(i) == first_command {
            out.push_str("\nSubcommands:\n");
        }
        let line = format!("{indent}{left:width$} {right}");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if first_command.is_some() {
        out.push_str("Type -h or --help after a command for more details\n");
    }
}

/// Help for the whole program: name, description, then every argument.
pub fn default_help(parser: &ArgsParser) -> String {
    let mut out = format!("{}\n", parser.name());
    if !parser.description().trim().is_empty() {
        out.push_str(parser.description().trim_end());
        out.push('\n');
    }
    out.push_str("\nArguments:\n");
    render_args(&mut out, parser.args(), "  ");
    out
}

/// Help for a single command.
pub fn default_command_help(command: &Command) -> String {
    let mut out = if command.help().trim().is_empty() {
        format!("    {}\n", command.name())
    } else {
        format!("    {}   {}\n", command.name(), command.help().trim())
    };
    out.push_str("\nArguments:\n");
    render_args(&mut out, command.args(), "    ");
    out
}

use crate::error::Result;
use crate::tpl::include;
use crate::tpl::render_context::Context;
use std::path::Path;

/// Directives understood inside `$( ... )`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `$(include <path>)`: inline another template, rendered with the same bindings.
    Include,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "include" => Some(Command::Include),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::Include => "include",
        }
    }

    fn execute(self, source: &Path, args: &str, ctx: &mut Context) -> Result<String> {
        match self {
            Command::Include => include::include(source, args, ctx),
        }
    }
}

/// Split a rendered command body into the command name and its argument
/// string at the first run of whitespace.
pub fn split_command_line(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], line[idx..].trim_start()),
        None => (line, ""),
    }
}

/// Run the command line written in `source`. Unknown commands are inert and
/// render as their own (trimmed) text.
pub fn dispatch(source: &Path, line: &str, ctx: &mut Context) -> Result<String> {
    let (name, args) = split_command_line(line);
    match Command::from_name(name) {
        Some(command) => command.execute(source, args.trim(), ctx),
        None => Ok(line.trim().to_string()),
    }
}

use crate::help;
use crate::registry::{Registry, Scope};

const COMMAND_HELP_FLAG_MESSAGE: &str = "shows command help and exits";

/// Renders the help text of a single command.
pub type CommandHelpGenerator = fn(&Command) -> String;

/// A sub-command: an argument of its parent scope that also owns a scope of
/// its own.
///
/// When its name appears in the input, every following token is parsed
/// against the command's own arguments.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    help: String,
    scope: Scope,
    help_gen: CommandHelpGenerator,
}

impl Command {
    /// A command holding only its help flag. Register it with
    /// [`Registry::add_command`] or create it in place with
    /// [`Registry::command`].
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            scope: Scope::new(COMMAND_HELP_FLAG_MESSAGE),
            help_gen: help::default_command_help,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn generate_help(&self) -> String {
        (self.help_gen)(self)
    }

    pub fn set_help_generator(&mut self, help_gen: CommandHelpGenerator) {
        self.help_gen = help_gen;
    }
}

impl Registry for Command {
    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }
}

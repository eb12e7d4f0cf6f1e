//! Argument registration for a single scope.

use crate::argument::{
    Argument, BoolFlag, DEFAULT_VALUE_NAME, HelpFlag, ListFlag, Positional, StringFlag,
};
use crate::command::Command;
use crate::error::ArgError;
use crate::order::sort_arguments;

/// Reject `candidate` if its id or any of its representations is already
/// taken in `existing`.
pub fn check_identifiers(existing: &[Argument], candidate: &Argument) -> Result<(), ArgError> {
    let id = candidate.id();
    let reprs = candidate.representations();
    for arg in existing {
        if arg.id() == id {
            return Err(ArgError::DuplicateIdentifier(id.to_string()));
        }
        let taken = arg.representations();
        if let Some(r) = reprs.iter().find(|r| taken.contains(*r)) {
            return Err(ArgError::DuplicateRepresentation(r.clone()));
        }
    }
    Ok(())
}

/// The argument list owned by the top-level parser or by one command.
///
/// The list always contains exactly one help flag and is kept in canonical
/// order.
#[derive(Debug, Clone)]
pub struct Scope {
    args: Vec<Argument>,
}

impl Scope {
    pub(crate) fn new(help_message: &str) -> Self {
        Self {
            args: vec![Argument::Help(HelpFlag::new(help_message))],
        }
    }

    pub fn args(&self) -> &[Argument] {
        &self.args
    }

    pub(crate) fn set_help_flag_message(&mut self, message: &str) {
        for arg in &mut self.args {
            if let Argument::Help(flag) = arg {
                flag.help = message.to_string();
                return;
            }
        }
    }

    fn push(&mut self, arg: Argument) -> Result<(), ArgError> {
        check_identifiers(&self.args, &arg)?;
        tracing::debug!(id = arg.id(), "registered argument");
        self.args.push(arg);
        sort_arguments(&mut self.args);
        Ok(())
    }

    pub(crate) fn add_positional(&mut self, arg: Positional) -> Result<(), ArgError> {
        if arg.name.is_empty() {
            return Err(ArgError::MissingIdentifier("positional argument"));
        }
        self.push(Argument::Positional(arg))
    }

    pub(crate) fn add_string_flag(&mut self, mut flag: StringFlag) -> Result<(), ArgError> {
        if flag.names.is_empty() {
            return Err(ArgError::MissingIdentifier("string flag"));
        }
        flag.nargs = flag.nargs.max(1);
        if flag.value_names.len() > flag.nargs {
            return Err(ArgError::TooManyValueNames {
                expected: flag.nargs,
                got: flag.value_names.len(),
            });
        }
        flag.value_names.resize(flag.nargs, DEFAULT_VALUE_NAME.to_string());
        self.push(Argument::String(flag))
    }

    pub(crate) fn add_list_flag(&mut self, flag: ListFlag) -> Result<(), ArgError> {
        if flag.names.is_empty() {
            return Err(ArgError::MissingIdentifier("list flag"));
        }
        self.push(Argument::List(flag))
    }

    pub(crate) fn add_bool_flag(&mut self, flag: BoolFlag) -> Result<(), ArgError> {
        if flag.names.is_empty() {
            return Err(ArgError::MissingIdentifier("bool flag"));
        }
        self.push(Argument::Bool(flag))
    }

    pub(crate) fn add_command(&mut self, command: Command) -> Result<&mut Command, ArgError> {
        if command.name().is_empty() {
            return Err(ArgError::MissingIdentifier("command"));
        }
        let name = command.name().to_string();
        self.push(Argument::Command(command))?;
        self.find_command_mut(&name)
            .ok_or(ArgError::MissingIdentifier("command"))
    }

    pub(crate) fn find_command(&self, name: &str) -> Option<&Command> {
        self.args.iter().find_map(|a| match a {
            Argument::Command(c) if c.name() == name => Some(c),
            _ => None,
        })
    }

    pub(crate) fn find_command_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.args.iter_mut().find_map(|a| match a {
            Argument::Command(c) if c.name() == name => Some(c),
            _ => None,
        })
    }
}

/// Argument registration shared by [`ArgsParser`](crate::ArgsParser) and
/// [`Command`].
///
/// Every method validates before inserting; on error the scope is unchanged.
pub trait Registry {
    fn scope(&self) -> &Scope;
    fn scope_mut(&mut self) -> &mut Scope;

    /// Registered arguments in canonical order (see [`sort_arguments`]).
    fn args(&self) -> &[Argument] {
        self.scope().args()
    }

    fn add_positional(&mut self, arg: Positional) -> Result<(), ArgError> {
        self.scope_mut().add_positional(arg)
    }

    /// Register a string flag. `nargs` below 1 becomes 1 and missing value
    /// names are filled with `value`.
    fn add_string_flag(&mut self, flag: StringFlag) -> Result<(), ArgError> {
        self.scope_mut().add_string_flag(flag)
    }

    fn add_list_flag(&mut self, flag: ListFlag) -> Result<(), ArgError> {
        self.scope_mut().add_list_flag(flag)
    }

    fn add_bool_flag(&mut self, flag: BoolFlag) -> Result<(), ArgError> {
        self.scope_mut().add_bool_flag(flag)
    }

    /// Register a prebuilt command and return it for further registration.
    fn add_command(&mut self, command: Command) -> Result<&mut Command, ArgError> {
        self.scope_mut().add_command(command)
    }

    /// Create an empty command named `name` and return it.
    fn command(&mut self, name: &str, help: &str) -> Result<&mut Command, ArgError> {
        self.add_command(Command::new(name, help))
    }

    fn find_command(&self, name: &str) -> Option<&Command> {
        self.scope().find_command(name)
    }

    fn find_command_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.scope_mut().find_command_mut(name)
    }

    /// Replace the description shown next to `-h, --help`.
    fn set_help_flag_message(&mut self, message: &str) {
        self.scope_mut().set_help_flag_message(message);
    }
}

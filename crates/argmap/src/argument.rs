//! Argument kinds and the capabilities every kind exposes.

use crate::command::Command;
use crate::order;

/// Placeholder label used when a string flag declares fewer value names than values.
pub const DEFAULT_VALUE_NAME: &str = "value";

pub(crate) const HELP_ID: &str = "help";
pub(crate) const HELP_SHORT: &str = "-h";
pub(crate) const HELP_LONG: &str = "--help";

fn non_empty(raw: impl Into<String>) -> Option<String> {
    let raw = raw.into();
    if raw.is_empty() { None } else { Some(raw) }
}

/// Identity and representations shared by the dashed flag kinds.
///
/// `name` maps to `--name`, `short` maps to `-short`. At least one of the two
/// must be set for the flag to be registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagNames {
    pub name: Option<String>,
    pub short: Option<String>,
}

impl FlagNames {
    // An empty string counts as unset, whichever way the struct was built.
    fn long_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    fn short_name(&self) -> Option<&str> {
        self.short.as_deref().filter(|s| !s.is_empty())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.long_name().is_none() && self.short_name().is_none()
    }

    fn id(&self) -> &str {
        self.long_name().or(self.short_name()).unwrap_or_default()
    }

    fn short_arg(&self) -> Option<String> {
        self.short_name().map(|s| format!("-{s}"))
    }

    fn long_arg(&self) -> Option<String> {
        self.long_name().map(|n| format!("--{n}"))
    }

    fn representations(&self) -> Vec<String> {
        self.short_arg().into_iter().chain(self.long_arg()).collect()
    }

    /// `-s, --name`, or whichever of the two exists.
    fn label(&self) -> String {
        self.representations().join(", ")
    }
}

/// A value identified by its position among the tokens no flag claimed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positional {
    pub name: String,
    pub help: String,
    pub required: bool,
}

impl Positional {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// `name` when required, `[name]` otherwise.
    pub fn meta_arg(&self) -> String {
        if self.required {
            self.name.clone()
        } else {
            format!("[{}]", self.name)
        }
    }
}

/// A flag followed by a fixed number of values (`--out a.txt`, `-o 1 2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringFlag {
    pub names: FlagNames,
    pub nargs: usize,
    pub value_names: Vec<String>,
    pub help: String,
}

impl Default for StringFlag {
    fn default() -> Self {
        Self {
            names: FlagNames::default(),
            nargs: 1,
            value_names: Vec::new(),
            help: String::new(),
        }
    }
}

impl StringFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.name = non_empty(name);
        self
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.names.short = non_empty(short);
        self
    }

    /// Number of values consumed after the flag. Values below 1 are raised to 1
    /// at registration.
    pub fn nargs(mut self, nargs: usize) -> Self {
        self.nargs = nargs;
        self
    }

    pub fn value_names<I, S>(mut self, value_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value_names = value_names.into_iter().map(Into::into).collect();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}

/// A flag followed by any number of values, up to the next known token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFlag {
    pub names: FlagNames,
    pub value_name: String,
    pub help: String,
}

impl Default for ListFlag {
    fn default() -> Self {
        Self {
            names: FlagNames::default(),
            value_name: DEFAULT_VALUE_NAME.to_string(),
            help: String::new(),
        }
    }
}

impl ListFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.name = non_empty(name);
        self
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.names.short = non_empty(short);
        self
    }

    pub fn value_name(mut self, value_name: impl Into<String>) -> Self {
        self.value_name = value_name.into();
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}

/// A flag whose presence alone is the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolFlag {
    pub names: FlagNames,
    pub help: String,
}

impl BoolFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.name = non_empty(name);
        self
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.names.short = non_empty(short);
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}

/// The built-in `-h/--help` flag present in every scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpFlag {
    pub help: String,
}

impl HelpFlag {
    pub fn new(help: impl Into<String>) -> Self {
        Self { help: help.into() }
    }
}

/// Every kind of argument a scope can hold.
#[derive(Debug, Clone)]
pub enum Argument {
    Positional(Positional),
    String(StringFlag),
    List(ListFlag),
    Bool(BoolFlag),
    Help(HelpFlag),
    Command(Command),
}

impl Argument {
    /// Key under which the parsed value is stored.
    pub fn id(&self) -> &str {
        match self {
            Self::Positional(a) => &a.name,
            Self::String(f) => f.names.id(),
            Self::List(f) => f.names.id(),
            Self::Bool(f) => f.names.id(),
            Self::Help(_) => HELP_ID,
            Self::Command(c) => c.name(),
        }
    }

    /// Literal tokens that select this argument in the input.
    ///
    /// Positionals have none: they are matched by position.
    pub fn representations(&self) -> Vec<String> {
        match self {
            Self::Positional(_) => Vec::new(),
            Self::String(f) => f.names.representations(),
            Self::List(f) => f.names.representations(),
            Self::Bool(f) => f.names.representations(),
            Self::Help(_) => vec![HELP_SHORT.to_string(), HELP_LONG.to_string()],
            Self::Command(c) => vec![c.name().to_string()],
        }
    }

    /// Left and right hand side of the help row, e.g.
    /// `("-o, --out file", "where to write")`.
    pub fn help_pair(&self) -> (String, String) {
        match self {
            Self::Positional(a) => (a.meta_arg(), a.help.clone()),
            Self::String(f) => {
                let mut left = f.names.label();
                for var in &f.value_names {
                    left.push(' ');
                    left.push_str(var);
                }
                (left, f.help.clone())
            }
            Self::List(f) => (
                format!("{} {var} {var}...", f.names.label(), var = f.value_name),
                f.help.clone(),
            ),
            Self::Bool(f) => (f.names.label(), f.help.clone()),
            Self::Help(f) => (format!("{HELP_SHORT}, {HELP_LONG}"), f.help.clone()),
            Self::Command(c) => (c.name().to_string(), c.help().to_string()),
        }
    }

    pub(crate) fn rank(&self) -> u8 {
        match self {
            Self::Positional(a) if a.required => order::POSITIONAL_REQUIRED,
            Self::Positional(_) => order::POSITIONAL_OPTIONAL,
            Self::String(_) => order::STRING_FLAG,
            Self::List(_) => order::LIST_FLAG,
            Self::Bool(_) => order::BOOL_FLAG,
            Self::Help(_) => order::HELP_FLAG,
            Self::Command(_) => order::COMMAND,
        }
    }

    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Positional(_))
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command(_))
    }
}

use thiserror::Error;

/// Rejected argument registration. The scope is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("{0}: at least one identifier must be specified")]
    MissingIdentifier(&'static str),

    #[error("identifier '{0}' already exists")]
    DuplicateIdentifier(String),

    #[error("representation '{0}' already exists")]
    DuplicateRepresentation(String),

    #[error("too many value names specified (expected {expected}, got {got})")]
    TooManyValueNames { expected: usize, got: usize },
}

/// What went wrong while scanning the input tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("incorrect usage of '{flag}': expected {expected} value(s)")]
    IncorrectArgumentUsage { flag: String, expected: usize },

    #[error("unrecognized argument '{0}'")]
    UnrecognizedArgument(String),

    #[error("missing required positional argument '{0}'")]
    MissingRequiredPositional(String),
}

/// A parse failure together with the command scope it happened in.
///
/// `scope` lists the command names crossed from the top level down to the
/// failing scope; it is empty for top-level failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", scope_suffix(.scope))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub scope: Vec<String>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            scope: Vec::new(),
        }
    }

    /// Record that the error surfaced from inside `command`.
    pub(crate) fn within(mut self, command: &str) -> Self {
        self.scope.insert(0, command.to_string());
        self
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(kind: ParseErrorKind) -> Self {
        Self::new(kind)
    }
}

fn scope_suffix(scope: &[String]) -> String {
    if scope.is_empty() {
        String::new()
    } else {
        format!(" for command '{}'", scope.join(" "))
    }
}

/// Failure to read a value back out of an [`ArgMap`](crate::ArgMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("key '{0}' not found in map")]
    KeyNotFound(String),

    #[error("argument '{key}' is not {expected}")]
    WrongShape { key: String, expected: &'static str },

    #[error("index {index} out of bounds for '{key}' ({len} value(s))")]
    IndexOutOfBounds {
        key: String,
        index: usize,
        len: usize,
    },
}

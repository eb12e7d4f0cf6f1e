//! The token scanner.
//!
//! One left-to-right pass over the input against the canonical argument list
//! of a scope:
//! - a token equal to a flag representation dispatches on the flag kind
//! - a token equal to a command name hands the rest of the input to that command
//! - `-h/--help` stops everything and reports a help request
//! - anything else fills the next free positional slot

use std::collections::HashMap;

use crate::argument::Argument;
use crate::error::{ParseError, ParseErrorKind};
use crate::map::{ArgMap, ArgValue};
use crate::registry::Registry;

/// Help was requested somewhere in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpRequest {
    /// Commands crossed before `-h/--help` was seen, outermost first.
    /// Empty when help was requested at the top level.
    pub trace: Vec<String>,
}

/// Successful result of a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Matches(ArgMap),
    Help(HelpRequest),
}

impl ParseOutcome {
    /// The parsed map, or `None` for a help request.
    pub fn matches(self) -> Option<ArgMap> {
        match self {
            Self::Matches(m) => Some(m),
            Self::Help(_) => None,
        }
    }
}

struct Slot<'a> {
    id: &'a str,
    required: bool,
}

/// Scan `tokens` against `args`, which must be in canonical order.
///
/// Only reachable through a [`Scope`](crate::Scope), whose list is sorted on
/// every registration.
pub(crate) fn scan<S: AsRef<str>>(args: &[Argument], tokens: &[S]) -> Result<ParseOutcome, ParseError> {
    let mut reprs: HashMap<String, &Argument> = HashMap::new();
    let mut slots: Vec<Slot<'_>> = Vec::new();
    for arg in args {
        match arg {
            Argument::Positional(p) => slots.push(Slot {
                id: &p.name,
                required: p.required,
            }),
            _ => {
                for r in arg.representations() {
                    reprs.insert(r, arg);
                }
            }
        }
    }

    let mut m = ArgMap::new();
    let mut filled = 0usize;
    let n = tokens.len();
    let mut i = 0usize;

    while i < n {
        let token = tokens[i].as_ref();
        tracing::trace!(token, index = i, "scanning token");

        let Some(&arg) = reprs.get(token) else {
            let Some(slot) = slots.get(filled) else {
                return Err(ParseErrorKind::UnrecognizedArgument(token.to_string()).into());
            };
            m.insert(slot.id, ArgValue::Str(token.to_string()));
            filled += 1;
            i += 1;
            continue;
        };

        match arg {
            Argument::String(flag) => {
                if n - i - 1 < flag.nargs {
                    return Err(ParseErrorKind::IncorrectArgumentUsage {
                        flag: token.to_string(),
                        expected: flag.nargs,
                    }
                    .into());
                }
                let values = tokens[i + 1..=i + flag.nargs]
                    .iter()
                    .map(|t| t.as_ref().to_string())
                    .collect();
                m.insert(arg.id(), ArgValue::List(values));
                i += flag.nargs + 1;
            }
            Argument::List(_) => {
                let start = i + 1;
                let mut end = start;
                while end < n && !reprs.contains_key(tokens[end].as_ref()) {
                    end += 1;
                }
                let values = tokens[start..end]
                    .iter()
                    .map(|t| t.as_ref().to_string())
                    .collect();
                m.insert(arg.id(), ArgValue::List(values));
                i = end;
            }
            Argument::Bool(_) => {
                m.insert(arg.id(), ArgValue::Bool(true));
                i += 1;
            }
            Argument::Help(_) => {
                return Ok(ParseOutcome::Help(HelpRequest::default()));
            }
            Argument::Command(cmd) => {
                tracing::debug!(command = cmd.name(), "entering command");
                let rest = &tokens[i + 1..];
                match scan(cmd.args(), rest).map_err(|e| e.within(cmd.name()))? {
                    ParseOutcome::Matches(sub) => {
                        m.insert(cmd.name(), ArgValue::Command(sub));
                    }
                    ParseOutcome::Help(mut req) => {
                        req.trace.insert(0, cmd.name().to_string());
                        return Ok(ParseOutcome::Help(req));
                    }
                }
                i = n;
            }
            // positionals never enter the representation table
            Argument::Positional(_) => {
                unreachable!("positional '{}' has no representation", arg.id())
            }
        }
    }

    if let Some(missing) = slots[filled..].iter().find(|s| s.required) {
        return Err(ParseErrorKind::MissingRequiredPositional(missing.id.to_string()).into());
    }

    Ok(ParseOutcome::Matches(m))
}

//! Declare typed command line arguments and parse them into a keyed map.
//!
//! Arguments come in a small closed set of kinds:
//! - positionals (required or optional), matched by position
//! - string flags taking a fixed number of values (`--out file`)
//! - list flags taking values up to the next known token (`--list a b c`)
//! - boolean flags (`-v`)
//! - commands, which own a nested set of arguments and take the rest of the input
//!
//! Every scope carries a built-in `-h/--help` flag. Parsing never prints or
//! exits on its own except through [`ArgsParser::parse`] and
//! [`ArgsParser::report_error`].
//!
//! ```
//! use argmap::{ArgsParser, BoolFlag, ParseOutcome, Positional, Registry, StringFlag};
//!
//! let mut parser = ArgsParser::new("greeter", "Says hello");
//! parser.add_positional(Positional::new("name").required(true)).unwrap();
//! parser.add_string_flag(StringFlag::new().name("lang").short("l")).unwrap();
//! parser.add_bool_flag(BoolFlag::new().name("loud")).unwrap();
//!
//! let ParseOutcome::Matches(m) = parser.parse_from(["mario", "-l", "it"]).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(m.positional("name").unwrap(), "mario");
//! assert_eq!(m.list_value("lang", 0).unwrap(), "it");
//! assert!(!m.flag("loud"));
//! ```

pub mod argument;
pub mod command;
pub mod error;
pub mod help;
pub mod map;
pub mod order;
pub mod parser;
pub mod registry;
pub mod scan;

pub use argument::{Argument, BoolFlag, FlagNames, HelpFlag, ListFlag, Positional, StringFlag};
pub use command::{Command, CommandHelpGenerator};
pub use error::{AccessError, ArgError, ParseError, ParseErrorKind};
pub use map::{ArgMap, ArgValue};
pub use parser::{ArgsParser, HelpGenerator};
pub use registry::{Registry, Scope, check_identifiers};
pub use scan::{HelpRequest, ParseOutcome};

//! Canonical argument order.
//!
//! Arguments are kept sorted by kind so that the scanner can hand out
//! positional slots in a fixed order: when an optional positional is declared
//! between two required ones and the user supplies two values, sorting is what
//! decides that both go to the required slots.

use crate::argument::Argument;

pub(crate) const POSITIONAL_REQUIRED: u8 = 1;
pub(crate) const POSITIONAL_OPTIONAL: u8 = 2;
pub(crate) const STRING_FLAG: u8 = 3;
pub(crate) const LIST_FLAG: u8 = 4;
pub(crate) const BOOL_FLAG: u8 = 5;
pub(crate) const HELP_FLAG: u8 = 9;
pub(crate) const COMMAND: u8 = 10;

/// Stable sort by kind: required positionals, optional positionals, string
/// flags, list flags, bool flags, the help flag, commands.
///
/// Arguments of the same kind keep their declaration order.
pub fn sort_arguments(args: &mut [Argument]) {
    args.sort_by_key(Argument::rank);
}

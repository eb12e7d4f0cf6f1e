use std::process;

use crate::command::Command;
use crate::error::ParseError;
use crate::help;
use crate::map::ArgMap;
use crate::registry::{Registry, Scope};
use crate::scan::{HelpRequest, ParseOutcome, scan};

const HELP_FLAG_MESSAGE: &str = "shows help message and exits";

/// Renders the help text of the whole program.
pub type HelpGenerator = fn(&ArgsParser) -> String;

/// Top-level parser: the program's own arguments plus its commands.
#[derive(Debug, Clone)]
pub struct ArgsParser {
    name: String,
    description: String,
    scope: Scope,
    help_gen: HelpGenerator,
}

impl ArgsParser {
    /// A parser holding only the built-in help flag.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            scope: Scope::new(HELP_FLAG_MESSAGE),
            help_gen: help::default_help,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_help_generator(&mut self, help_gen: HelpGenerator) {
        self.help_gen = help_gen;
    }

    pub fn generate_help(&self) -> String {
        (self.help_gen)(self)
    }

    /// Follow `trace` down the command tree.
    pub fn resolve_command(&self, trace: &[String]) -> Option<&Command> {
        let (first, rest) = trace.split_first()?;
        let mut cmd = self.find_command(first)?;
        for name in rest {
            cmd = cmd.find_command(name)?;
        }
        Some(cmd)
    }

    /// Help text for the scope a help request came from.
    pub fn help_for(&self, request: &HelpRequest) -> String {
        match self.resolve_command(&request.trace) {
            Some(cmd) => format!(
                "{} {}\n{}",
                self.name,
                request.trace.join(" "),
                cmd.generate_help()
            ),
            None => self.generate_help(),
        }
    }

    /// Parse `tokens`, which must not include the program name.
    pub fn parse_from<I, T>(&self, tokens: I) -> Result<ParseOutcome, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        tracing::debug!(parser = %self.name, tokens = tokens.len(), "parsing");
        scan(self.args(), &tokens)
    }

    /// Parse the process arguments.
    ///
    /// A help request prints the matching help text and exits the process
    /// with status 0.
    pub fn parse(&self) -> Result<ArgMap, ParseError> {
        match self.parse_from(std::env::args().skip(1))? {
            ParseOutcome::Matches(m) => Ok(m),
            ParseOutcome::Help(request) => {
                println!("{}", self.help_for(&request));
                process::exit(0);
            }
        }
    }

    pub fn print_help(&self) {
        println!("{}", self.generate_help());
    }

    /// Print `err` followed by the help text to stderr and exit with status 1.
    pub fn report_error(&self, err: impl std::fmt::Display) -> ! {
        eprintln!("error: {err}");
        eprintln!();
        eprintln!("{}", self.generate_help());
        process::exit(1);
    }
}

impl Registry for ArgsParser {
    fn scope(&self) -> &Scope {
        &self.scope
    }

    fn scope_mut(&mut self) -> &mut Scope {
        &mut self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{BoolFlag, Positional};

    fn printer() -> ArgsParser {
        let mut p = ArgsParser::new("printer", "shows you something");
        p.command("hello", "greets the user").unwrap();
        let print = p.command("print", "prints a string or a file").unwrap();
        print
            .command("string", "prints a string")
            .unwrap()
            .add_positional(Positional::new("input").required(true))
            .unwrap();
        print
            .command("file", "prints a file")
            .unwrap()
            .add_positional(Positional::new("path").required(true))
            .unwrap();
        p
    }

    #[test]
    fn parse_from_returns_nested_maps() {
        let p = printer();
        let m = p
            .parse_from(["print", "string", "hi there"])
            .unwrap()
            .matches()
            .unwrap();
        let (cmd, sub) = m.invoked_command().unwrap();
        assert_eq!(cmd, "print");
        let (leaf, leaf_map) = sub.invoked_command().unwrap();
        assert_eq!(leaf, "string");
        assert_eq!(leaf_map.positional("input").unwrap(), "hi there");
    }

    #[test]
    fn help_for_renders_deepest_scope() {
        let p = printer();
        let ParseOutcome::Help(req) = p.parse_from(["print", "-h"]).unwrap() else {
            panic!("expected help");
        };
        let text = p.help_for(&req);
        assert!(text.starts_with("printer print\n    print   prints a string or a file\n"));
        assert!(text.contains("string"));

        let ParseOutcome::Help(req) = p.parse_from(["--help", "print"]).unwrap() else {
            panic!("expected help");
        };
        assert_eq!(p.help_for(&req), p.generate_help());
    }

    #[test]
    fn resolve_command_walks_the_tree() {
        let p = printer();
        let trace = vec!["print".to_string(), "file".to_string()];
        assert_eq!(p.resolve_command(&trace).unwrap().name(), "file");
        assert!(p.resolve_command(&[]).is_none());
        assert!(p.resolve_command(&["nope".to_string()]).is_none());
    }

    #[test]
    fn custom_help_generators() {
        let mut p = ArgsParser::new("argmap", "custom help");
        p.set_help_generator(|p| format!("{} custom help", p.name()));
        assert_eq!(p.generate_help(), "argmap custom help");

        let cmd = p.command("run", "").unwrap();
        cmd.set_help_generator(|c| format!("only {}", c.name()));
        assert_eq!(cmd.generate_help(), "only run");
    }

    #[test]
    fn parsing_is_repeatable() {
        let mut p = ArgsParser::new("again", "");
        p.add_bool_flag(BoolFlag::new().short("v")).unwrap();
        let first = p.parse_from(["-v"]).unwrap();
        let second = p.parse_from(["-v"]).unwrap();
        assert_eq!(first, second);
    }
}

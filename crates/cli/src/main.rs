mod demos;

use anyhow::Result;
use argmap::ParseOutcome;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use crate::demos::Program;

#[derive(Parser)]
#[command(name = "argmap-demo")]
#[command(version, about = "Demo programs built on the argmap parser", long_about = None)]
struct Cli {
    /// Print the parsed argument map as JSON instead of running the demo
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    demo: Demo,
}

/// Tokens handed verbatim to the demo's own parser.
#[derive(Args)]
struct DemoArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[derive(Subcommand)]
enum Demo {
    /// Greets you (string flag)
    #[command(disable_help_flag = true)]
    Hello(DemoArgs),

    /// Greets you in english or spanish (bool flag)
    #[command(disable_help_flag = true)]
    HelloBool(DemoArgs),

    /// Greets two people (string flag with two values)
    #[command(disable_help_flag = true)]
    HelloNargs(DemoArgs),

    /// Adds, subtracts, multiplies or divides two numbers
    #[command(disable_help_flag = true)]
    Calc(DemoArgs),

    /// Prints a shopping list (list flag)
    #[command(disable_help_flag = true)]
    List(DemoArgs),

    /// Introduces itself (required and optional positionals)
    #[command(disable_help_flag = true)]
    Myname(DemoArgs),

    /// Prints a string or a file (nested commands)
    #[command(disable_help_flag = true)]
    Print(DemoArgs),
}

impl Demo {
    fn split(self) -> (&'static Program, Vec<String>) {
        match self {
            Self::Hello(a) => (&demos::HELLO, a.args),
            Self::HelloBool(a) => (&demos::HELLO_BOOL, a.args),
            Self::HelloNargs(a) => (&demos::HELLO_NARGS, a.args),
            Self::Calc(a) => (&demos::CALC, a.args),
            Self::List(a) => (&demos::LIST, a.args),
            Self::Myname(a) => (&demos::MYNAME, a.args),
            Self::Print(a) => (&demos::PRINT, a.args),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let (program, tokens) = cli.demo.split();

    let parser = (program.build)()?;
    tracing::debug!(demo = parser.name(), "running demo");

    let m = match parser.parse_from(tokens) {
        Ok(ParseOutcome::Matches(m)) => m,
        Ok(ParseOutcome::Help(request)) => {
            println!("{}", parser.help_for(&request));
            return Ok(());
        }
        Err(err) => parser.report_error(err),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&m)?);
        return Ok(());
    }

    match (program.run)(&m) {
        Ok(out) => {
            println!("{out}");
            Ok(())
        }
        Err(err) => parser.report_error(format!("{err:#}")),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

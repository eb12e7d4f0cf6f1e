//! The demo programs: each one declares an argmap parser and turns the parsed
//! map into its output text.

use std::fs;

use anyhow::{Context, Result, bail};
use argmap::{ArgMap, ArgsParser, BoolFlag, ListFlag, Positional, Registry, StringFlag};

/// A demo: how to build its parser and what to do with the result.
pub struct Program {
    pub build: fn() -> Result<ArgsParser>,
    pub run: fn(&ArgMap) -> Result<String>,
}

pub const HELLO: Program = Program {
    build: hello_parser,
    run: hello,
};

pub const HELLO_BOOL: Program = Program {
    build: hello_bool_parser,
    run: hello_bool,
};

pub const HELLO_NARGS: Program = Program {
    build: hello_nargs_parser,
    run: hello_nargs,
};

pub const CALC: Program = Program {
    build: calc_parser,
    run: calc,
};

pub const LIST: Program = Program {
    build: list_parser,
    run: list,
};

pub const MYNAME: Program = Program {
    build: myname_parser,
    run: myname,
};

pub const PRINT: Program = Program {
    build: print_parser,
    run: print,
};

fn hello_parser() -> Result<ArgsParser> {
    let mut parser = ArgsParser::new("Greeter", "Says hello");
    parser.add_string_flag(
        StringFlag::new()
            .name("hello")
            .short("hi")
            .value_names(["urname"])
            .help("greets you"),
    )?;
    Ok(parser)
}

fn hello(m: &ArgMap) -> Result<String> {
    let name = m.list_value("hello", 0).unwrap_or("world");
    Ok(format!("Hello {name}"))
}

fn hello_bool_parser() -> Result<ArgsParser> {
    let mut parser = hello_parser()?;
    parser.add_bool_flag(BoolFlag::new().name("spanish").help("greets in spanish"))?;
    Ok(parser)
}

fn hello_bool(m: &ArgMap) -> Result<String> {
    let name = m.list_value("hello", 0).unwrap_or("world");
    if m.flag("spanish") {
        Ok(format!("Hola {name}"))
    } else {
        Ok(format!("Hello {name}"))
    }
}

fn hello_nargs_parser() -> Result<ArgsParser> {
    let mut parser = ArgsParser::new("Greeter", "Says hello to two people");
    parser.add_string_flag(
        StringFlag::new()
            .name("hello")
            .short("hi")
            .nargs(2)
            .value_names(["first", "second"])
            .help("greets both of you"),
    )?;
    Ok(parser)
}

fn hello_nargs(m: &ArgMap) -> Result<String> {
    let first = m.list_value("hello", 0)?;
    let second = m.list_value("hello", 1)?;
    Ok(format!("Hello {first} and {second}"))
}

fn calc_parser() -> Result<ArgsParser> {
    let mut parser = ArgsParser::new("Calculator", "Solves all your problems");
    parser.add_positional(
        Positional::new("action")
            .required(true)
            .help("one of add, sub, prod, div"),
    )?;
    parser.add_string_flag(
        StringFlag::new()
            .short("o")
            .nargs(2)
            .value_names(["a", "b"])
            .help("the two operands"),
    )?;
    Ok(parser)
}

fn operand(raw: &str) -> Result<f64> {
    raw.parse()
        .with_context(|| format!("operand '{raw}' is not a number"))
}

fn calc(m: &ArgMap) -> Result<String> {
    let action = m.positional("action")?;
    let a = operand(m.list_value("o", 0).context("not enough operands")?)?;
    let b = operand(m.list_value("o", 1).context("not enough operands")?)?;
    let result = match action {
        "add" => a + b,
        "sub" => a - b,
        "prod" => a * b,
        "div" => a / b,
        other => bail!("unknown operation '{other}'"),
    };
    Ok(result.to_string())
}

fn list_parser() -> Result<ArgsParser> {
    let mut parser = ArgsParser::new("Shopping list", "Records what you need to buy");
    parser.add_list_flag(
        ListFlag::new()
            .name("list")
            .short("l")
            .value_name("item")
            .help("items to be bought"),
    )?;
    parser.add_bool_flag(BoolFlag::new().short("c").help("look for the cheapest goods"))?;
    Ok(parser)
}

fn list(m: &ArgMap) -> Result<String> {
    if !m.is_present("list") {
        bail!("please insert a list of items");
    }
    let items = m.list("list")?;

    let plural = if items.len() == 1 { "" } else { "s" };
    let mut out = format!("[SHOPPING LIST - {} item{plural}]", items.len());
    if m.flag("c") {
        out.push_str("\n[Keep an eye on the budget!]");
    }
    for item in items {
        out.push('\n');
        out.push_str(item);
    }
    Ok(out)
}

fn myname_parser() -> Result<ArgsParser> {
    let mut parser = ArgsParser::new("Introducing myself", "Tells you how I'm called");
    parser.add_positional(Positional::new("name").required(true).help("my name"))?;
    parser.add_positional(Positional::new("surname").help("my surname"))?;
    Ok(parser)
}

fn myname(m: &ArgMap) -> Result<String> {
    let name = m.positional("name")?;
    match m.positional("surname") {
        Ok(surname) => Ok(format!("My name is {surname}, {name} {surname}")),
        Err(_) => Ok(format!("My name is {name}")),
    }
}

fn print_parser() -> Result<ArgsParser> {
    let mut parser = ArgsParser::new("Printer", "Shows you something from command line");
    parser.command("hello", "greets the user")?;

    let printer = parser.command("print", "prints a string or the content of a file")?;
    printer
        .command("string", "prints a string")?
        .add_positional(
            Positional::new("input")
                .required(true)
                .help("the input string"),
        )?;
    printer
        .command("file", "prints the content of a file")?
        .add_positional(
            Positional::new("path")
                .required(true)
                .help("location of the file to be read"),
        )?;
    Ok(parser)
}

fn print(m: &ArgMap) -> Result<String> {
    let Some((cmd, cmd_map)) = m.invoked_command() else {
        bail!("please type a command to be executed");
    };

    match cmd {
        "hello" => Ok("Nice to meet you!".to_string()),
        "print" => {
            let Some((sub, sub_map)) = cmd_map.invoked_command() else {
                bail!("missing subcommand for command 'print'");
            };
            match sub {
                "string" => Ok(sub_map.positional("input")?.to_string()),
                "file" => {
                    let path = sub_map.positional("path")?;
                    fs::read_to_string(path)
                        .with_context(|| format!("failed to read {path}"))
                }
                other => bail!("unknown subcommand '{other}'"),
            }
        }
        other => bail!("unknown command '{other}'"),
    }
}

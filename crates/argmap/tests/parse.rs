use argmap::{
    ArgError, ArgValue, ArgsParser, BoolFlag, ListFlag, ParseErrorKind, ParseOutcome, Positional,
    Registry, StringFlag,
};

fn parse_ok(parser: &ArgsParser, tokens: &[&str]) -> argmap::ArgMap {
    match parser.parse_from(tokens.iter().copied()) {
        Ok(ParseOutcome::Matches(m)) => m,
        other => panic!("unexpected outcome for {tokens:?}: {other:?}"),
    }
}

fn parse_err(parser: &ArgsParser, tokens: &[&str]) -> argmap::ParseError {
    match parser.parse_from(tokens.iter().copied()) {
        Err(e) => e,
        other => panic!("expected an error for {tokens:?}, got {other:?}"),
    }
}

#[test]
fn greeter_scenario() {
    let mut parser = ArgsParser::new("argmap", "greeter");
    parser
        .add_string_flag(
            StringFlag::new()
                .name("hello")
                .short("hi")
                .nargs(1)
                .value_names(["name"])
                .help("greets you"),
        )
        .unwrap();

    let m = parse_ok(&parser, &["-hi", "jack"]);
    assert_eq!(
        serde_json::to_value(&m).unwrap(),
        serde_json::json!({ "hello": ["jack"] })
    );

    let err = parse_err(&parser, &["--hello"]);
    assert!(matches!(err.kind, ParseErrorKind::IncorrectArgumentUsage { .. }));

    let err = parse_err(&parser, &["--hello", "jack", "jill"]);
    assert_eq!(err.kind, ParseErrorKind::UnrecognizedArgument("jill".to_string()));
    assert_eq!(err.to_string(), "unrecognized argument 'jill'");
}

#[test]
fn string_flag_partial_declarations() {
    let mut parser = ArgsParser::new("argmap", "partial");
    parser.add_string_flag(StringFlag::new().name("hello")).unwrap();
    parser.add_string_flag(StringFlag::new().short("hi")).unwrap();
    parser
        .add_string_flag(StringFlag::new().short("v").value_names(["name"]))
        .unwrap();
    parser.add_string_flag(StringFlag::new().short("n").nargs(2)).unwrap();

    let err = parser
        .add_string_flag(StringFlag::new().short("x").value_names(["name1", "name2"]))
        .unwrap_err();
    assert_eq!(err, ArgError::TooManyValueNames { expected: 1, got: 2 });
    assert!(err.to_string().starts_with("too many value names specified"));
}

#[test]
fn positional_scenarios() {
    let mut parser = ArgsParser::new("argmap", "positionals");
    parser
        .add_positional(Positional::new("lang").required(true))
        .unwrap();
    parser.add_positional(Positional::new("surname")).unwrap();

    let m = parse_ok(&parser, &["en", "mario"]);
    assert_eq!(
        serde_json::to_value(&m).unwrap(),
        serde_json::json!({ "lang": "en", "surname": "mario" })
    );

    let m = parse_ok(&parser, &["en"]);
    assert_eq!(m.positional("lang").unwrap(), "en");
    assert!(!m.is_present("surname"));

    let err = parse_err(&parser, &[]);
    assert_eq!(
        err.kind,
        ParseErrorKind::MissingRequiredPositional("lang".to_string())
    );

    let err = parse_err(&parser, &["a", "b", "c"]);
    assert_eq!(err.kind, ParseErrorKind::UnrecognizedArgument("c".to_string()));
}

#[test]
fn optional_declared_first_still_fills_after_required() {
    let mut parser = ArgsParser::new("argmap", "positionals");
    parser.add_positional(Positional::new("opt")).unwrap();
    parser
        .add_positional(Positional::new("req").required(true))
        .unwrap();

    let m = parse_ok(&parser, &["a"]);
    assert_eq!(
        serde_json::to_value(&m).unwrap(),
        serde_json::json!({ "req": "a" })
    );

    let m = parse_ok(&parser, &["a", "b"]);
    assert_eq!(m.positional("req").unwrap(), "a");
    assert_eq!(m.positional("opt").unwrap(), "b");
}

#[test]
fn shopping_list() {
    let mut parser = ArgsParser::new("Shopping list", "Records what you need to buy");
    parser
        .add_list_flag(
            ListFlag::new()
                .name("list")
                .short("l")
                .value_name("item")
                .help("items to be bought"),
        )
        .unwrap();
    parser
        .add_bool_flag(BoolFlag::new().short("c").help("look for the cheapest goods"))
        .unwrap();

    let m = parse_ok(&parser, &["-l", "milk", "eggs", "-c"]);
    assert_eq!(m.list("list").unwrap(), ["milk", "eggs"]);
    assert!(m.flag("c"));

    let m = parse_ok(&parser, &["-c", "--list"]);
    assert_eq!(m.get("list"), Some(&ArgValue::List(Vec::new())));

    let m = parse_ok(&parser, &[]);
    assert!(m.is_empty());
    assert!(!m.flag("c"));
}

#[test]
fn commands_scope_their_arguments() {
    let mut parser = ArgsParser::new("tool", "nested commands");
    parser.add_bool_flag(BoolFlag::new().short("x")).unwrap();
    let remote = parser.command("remote", "manage remotes").unwrap();
    remote.add_bool_flag(BoolFlag::new().short("x")).unwrap();
    let add = remote.command("add", "add a remote").unwrap();
    add.add_positional(Positional::new("name").required(true))
        .unwrap();
    add.add_positional(Positional::new("url").required(true))
        .unwrap();

    let m = parse_ok(&parser, &["-x", "remote", "-x", "add", "origin", "git@host"]);
    assert_eq!(
        serde_json::to_value(&m).unwrap(),
        serde_json::json!({
            "x": true,
            "remote": { "x": true, "add": { "name": "origin", "url": "git@host" } }
        })
    );

    let err = parse_err(&parser, &["remote", "add", "origin"]);
    assert_eq!(
        err.to_string(),
        "missing required positional argument 'url' for command 'remote add'"
    );

    let m = parse_ok(&parser, &["remote"]);
    assert!(m.command("remote").unwrap().is_empty());
}

#[test]
fn help_anywhere_wins() {
    let mut parser = ArgsParser::new("tool", "help");
    parser
        .add_positional(Positional::new("file").required(true))
        .unwrap();
    let run = parser.command("run", "runs").unwrap();
    run.add_string_flag(StringFlag::new().short("n").nargs(2))
        .unwrap();

    for tokens in [
        &["--help"][..],
        &["file.txt", "-h", "garbage", "--unknown"][..],
    ] {
        match parser.parse_from(tokens.iter().copied()).unwrap() {
            ParseOutcome::Help(req) => assert!(req.trace.is_empty()),
            other => panic!("expected help for {tokens:?}, got {other:?}"),
        }
    }

    match parser.parse_from(["f", "run", "--help", "-n"]).unwrap() {
        ParseOutcome::Help(req) => {
            assert_eq!(req.trace, ["run"]);
            assert!(parser.help_for(&req).contains("    run   runs"));
        }
        other => panic!("expected help, got {other:?}"),
    }
}

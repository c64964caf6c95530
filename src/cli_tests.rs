use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parses_check_with_all_flags() {
    let cli = Cli::try_parse_from([
        "evidence-guard",
        "-vv",
        "--color",
        "never",
        "check",
        "--suite",
        "suite.toml",
        "--root",
        "app",
        "--format",
        "json",
        "--output",
        "out.json",
        "--only",
        "Invoice",
        "--only",
        "Security",
        "--jobs",
        "4",
        "--fail-fast",
        "--timeout-ms",
        "250",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.color, ColorChoice::Never));
    let Commands::Check(args) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.suite, Some(PathBuf::from("suite.toml")));
    assert_eq!(args.root, Some(PathBuf::from("app")));
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from("out.json")));
    assert_eq!(args.only, ["Invoice", "Security"]);
    assert_eq!(args.jobs, Some(4));
    assert!(args.fail_fast);
    assert_eq!(args.timeout_ms, Some(250));
}

#[test]
fn check_defaults() {
    let cli = Cli::try_parse_from(["evidence-guard", "check"]).unwrap();
    let Commands::Check(args) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.format, OutputFormat::Text);
    assert!(args.only.is_empty());
    assert_eq!(args.jobs, None);
    assert!(!args.fail_fast);
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["evidence-guard", "list", "-q", "--log-json"]).unwrap();
    assert!(cli.quiet);
    assert!(cli.log_json);
    assert!(matches!(cli.command, Commands::List(_)));
}

#[test]
fn rejects_unknown_format() {
    let err = Cli::try_parse_from(["evidence-guard", "check", "--format", "sarif"]).unwrap_err();
    assert!(err.to_string().contains("Unknown output format: sarif"));
}

use super::args::{CliArgs, Command};
use clap::Parser;
use std::path::Path;

#[test]
fn parses_annotate_with_output_and_pretty() {
    let args = CliArgs::try_parse_from(["jsphp", "annotate", "program.json", "-o", "out.json", "--pretty"])
        .expect("annotate args should parse");
    let Command::Annotate(annotate) = args.command else {
        panic!("expected annotate subcommand");
    };
    assert_eq!(annotate.input, Path::new("program.json"));
    assert_eq!(annotate.output.as_deref(), Some(Path::new("out.json")));
    assert!(annotate.pretty);
    assert!(!annotate.reads_stdin());
}

#[test]
fn annotate_dash_reads_stdin() {
    let args = CliArgs::try_parse_from(["jsphp", "annotate", "-"]).expect("should parse");
    let Command::Annotate(annotate) = args.command else {
        panic!("expected annotate subcommand");
    };
    assert!(annotate.reads_stdin());
    assert!(!annotate.pretty);
}

#[test]
fn annotate_requires_input() {
    assert!(CliArgs::try_parse_from(["jsphp", "annotate"]).is_err());
}

#[test]
fn parses_runtime_flags() {
    let args = CliArgs::try_parse_from([
        "jsphp",
        "runtime",
        "--template",
        "tests.php",
        "--root",
        "php",
        "--timezone",
        "UTC",
    ])
    .expect("runtime args should parse");
    let Command::Runtime(runtime) = args.command else {
        panic!("expected runtime subcommand");
    };
    assert_eq!(runtime.template.as_deref(), Some(Path::new("tests.php")));
    assert_eq!(runtime.root.as_deref(), Some(Path::new("php")));
    assert_eq!(runtime.timezone.as_deref(), Some("UTC"));
    assert!(runtime.output.is_none());
}

#[test]
fn config_flag_is_global() {
    let args = CliArgs::try_parse_from(["jsphp", "runtime", "--config", "conf/jsphp.json"])
        .expect("global --config should be accepted after the subcommand");
    assert_eq!(args.config.as_deref(), Some(Path::new("conf/jsphp.json")));

    let args = CliArgs::try_parse_from(["jsphp", "--config", "jsphp.json", "runtime"])
        .expect("global --config should be accepted before the subcommand");
    assert_eq!(args.config.as_deref(), Some(Path::new("jsphp.json")));
}

#[test]
fn subcommand_is_required() {
    assert!(CliArgs::try_parse_from(["jsphp"]).is_err());
}

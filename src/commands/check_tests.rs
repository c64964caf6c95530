use std::path::Path;

use clap::Parser;
use serde_json::Value;
use tempfile::TempDir;

use crate::checker::ClassificationPolicy;

use super::*;

const SUITE: &str = r#"
[groups.model]
class = "class Invoice"
status = "InvoiceStatus"

[[tests]]
name = "Invoice Model"
artifacts = ["lib/invoice.dart"]
groups = ["model"]
policy = "hard"

[[tests]]
name = "Missing File"
artifacts = ["missing.txt"]
policy = "hard"

[tests.checks]
anything = "x"
"#;

fn fixture(suite: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("suite.toml"), suite).unwrap();
    std::fs::create_dir_all(dir.path().join("lib")).unwrap();
    std::fs::write(
        dir.path().join("lib/invoice.dart"),
        "class Invoice {}\nenum InvoiceStatus { draft }\n",
    )
    .unwrap();
    dir
}

fn quiet_cli() -> Cli {
    Cli::try_parse_from(["evidence-guard", "-q", "check"]).unwrap()
}

fn json_args(dir: &Path) -> CheckArgs {
    CheckArgs {
        suite: Some(dir.join("suite.toml")),
        format: OutputFormat::Json,
        output: Some(dir.join("report.json")),
        ..CheckArgs::default()
    }
}

fn read_report(dir: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(dir.join("report.json")).unwrap()).unwrap()
}

#[test]
fn failing_test_sets_exit_code() {
    let dir = fixture(SUITE);

    let code = run_check_impl(&json_args(dir.path()), &quiet_cli()).unwrap();

    assert_eq!(code, EXIT_TESTS_FAILED);
    let report = read_report(dir.path());
    assert_eq!(report["results"][0]["status"], "PASS");
    assert_eq!(report["results"][1]["status"], "FAIL");
    assert!(
        report["results"][1]["message"]
            .as_str()
            .unwrap()
            .contains("missing.txt")
    );
    assert_eq!(report["success"], false);
}

#[test]
fn only_selection_skips_other_tests() {
    let dir = fixture(SUITE);
    let args = CheckArgs {
        only: vec!["Invoice Model".to_string()],
        ..json_args(dir.path())
    };

    let code = run_check_impl(&args, &quiet_cli()).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    let report = read_report(dir.path());
    assert_eq!(report["results"][1]["status"], "SKIP");
    assert_eq!(report["summary"]["skip"], 1);
}

#[test]
fn unknown_only_name_is_config_error() {
    let dir = fixture(SUITE);
    let args = CheckArgs {
        only: vec!["Nope".to_string()],
        ..json_args(dir.path())
    };

    let err = run_check_impl(&args, &quiet_cli()).unwrap_err();

    assert!(err.to_string().contains("Unknown test name(s) for --only: Nope"));
    assert!(!dir.path().join("report.json").exists());
}

#[test]
fn root_flag_overrides_suite_directory() {
    let dir = fixture(SUITE);
    let elsewhere = TempDir::new().unwrap();
    std::fs::write(elsewhere.path().join("missing.txt"), "x marks the spot").unwrap();
    std::fs::create_dir_all(elsewhere.path().join("lib")).unwrap();
    std::fs::write(
        elsewhere.path().join("lib/invoice.dart"),
        "class Invoice with InvoiceStatus",
    )
    .unwrap();
    let args = CheckArgs {
        root: Some(elsewhere.path().to_path_buf()),
        ..json_args(dir.path())
    };

    let code = run_check_impl(&args, &quiet_cli()).unwrap();

    assert_eq!(code, EXIT_SUCCESS);
}

#[test]
fn misconfigured_suite_is_error() {
    let dir = fixture(
        r#"
[[tests]]
name = "Bad"
artifacts = ["a.txt"]
policy = "soft"
warn_threshold = 150.0
"#,
    );

    let err = run_check_impl(&json_args(dir.path()), &quiet_cli()).unwrap_err();

    assert!(matches!(err, EvidenceGuardError::PolicyMisconfiguration { .. }));
}

#[test]
fn fail_fast_skips_later_tests() {
    let dir = fixture(
        r#"
[[tests]]
name = "First"
artifacts = ["missing.txt"]
policy = "hard"

[[tests]]
name = "Second"
artifacts = ["lib/invoice.dart"]
policy = "hard"
"#,
    );
    let args = CheckArgs {
        fail_fast: true,
        jobs: Some(1),
        ..json_args(dir.path())
    };

    run_check_impl(&args, &quiet_cli()).unwrap();

    let report = read_report(dir.path());
    assert_eq!(report["results"][0]["status"], "FAIL");
    assert_eq!(report["results"][1]["status"], "SKIP");
}

#[test]
fn validate_selection_accepts_known_names() {
    let definition = TestDefinition::builder("Known", ClassificationPolicy::Hard)
        .artifact("a.txt")
        .build()
        .unwrap();
    assert!(validate_selection(&["Known".to_string()], &[definition]).is_ok());
    assert!(validate_selection(&[], &[]).is_ok());
}

#[test]
fn text_output_includes_summary() {
    let dir = fixture(SUITE);
    let args = CheckArgs {
        format: OutputFormat::Text,
        output: Some(dir.path().join("report.txt")),
        suite: Some(dir.path().join("suite.toml")),
        ..CheckArgs::default()
    };
    let cli = Cli::try_parse_from(["evidence-guard", "--color", "never", "check"]).unwrap();

    run_check_impl(&args, &cli).unwrap();

    let text = std::fs::read_to_string(dir.path().join("report.txt")).unwrap();
    assert!(text.contains("❌ FAIL: Missing File"));
    assert!(text.contains("Summary: 2 tests, 1 passed, 0 warnings, 1 failed, 0 skipped"));
}

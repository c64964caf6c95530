//! Integration tests for the `check` command.

mod common;

use common::{INVOICE_SUITE, PASSING_SUITE, TestFixture};
use predicates::prelude::*;
use serde_json::Value;

fn json_report(fixture: &TestFixture, extra: &[&str]) -> Value {
    let output = evidence_guard!()
        .current_dir(fixture.path())
        .args(["check", "--format", "json"])
        .args(extra)
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn check_passes_when_all_patterns_found() {
    let fixture = TestFixture::new();
    fixture.create_suite(PASSING_SUITE);
    fixture.create_invoice_sources();

    evidence_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ PASS: Invoice Model"))
        .stdout(predicate::str::contains("All 2 patterns found"))
        .stdout(predicate::str::contains("Overall: PASSED"));
}

#[test]
fn check_fails_with_exit_code_one() {
    let fixture = TestFixture::new();
    fixture.create_suite(INVOICE_SUITE);
    fixture.create_invoice_sources();

    evidence_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ FAIL: Missing File"))
        .stdout(predicate::str::contains("Error reading artifact 'missing.txt'"))
        .stdout(predicate::str::contains("Overall: FAILED"));
}

#[test]
fn check_soft_policy_warns_below_threshold() {
    let fixture = TestFixture::new();
    fixture.create_suite(INVOICE_SUITE);
    fixture.create_invoice_sources();

    let report = json_report(&fixture, &[]);
    let service = &report["results"][1];

    assert_eq!(service["test"], "Invoice Service");
    assert_eq!(service["status"], "WARNING");
    assert_eq!(service["details"]["coverage"], 42.9);
    assert_eq!(
        service["message"],
        "Coverage below threshold: 42.9% (3/7 patterns found)"
    );
}

#[test]
fn check_json_summary_and_order() {
    let fixture = TestFixture::new();
    fixture.create_suite(INVOICE_SUITE);
    fixture.create_invoice_sources();

    let report = json_report(&fixture, &[]);

    assert_eq!(report["success"], false);
    assert_eq!(report["summary"]["total"], 3);
    assert_eq!(report["summary"]["pass"], 1);
    assert_eq!(report["summary"]["warning"], 1);
    assert_eq!(report["summary"]["fail"], 1);
    let names: Vec<&str> = report["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["test"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Invoice Model", "Invoice Service", "Missing File"]);
}

#[test]
fn check_parallel_run_keeps_definition_order() {
    let fixture = TestFixture::new();
    fixture.create_suite(INVOICE_SUITE);
    fixture.create_invoice_sources();

    let report = json_report(&fixture, &["--jobs", "3"]);

    assert_eq!(report["results"][0]["test"], "Invoice Model");
    assert_eq!(report["results"][2]["test"], "Missing File");
}

#[test]
fn check_only_skips_unselected_tests() {
    let fixture = TestFixture::new();
    fixture.create_suite(INVOICE_SUITE);
    fixture.create_invoice_sources();

    evidence_guard!()
        .current_dir(fixture.path())
        .args(["check", "--only", "Invoice Model", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not selected for this run"));
}

#[test]
fn check_unknown_only_name_is_config_error() {
    let fixture = TestFixture::new();
    fixture.create_suite(INVOICE_SUITE);

    evidence_guard!()
        .current_dir(fixture.path())
        .args(["check", "--only", "Nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error: Configuration error: Unknown test name(s) for --only: Nope"));
}

#[test]
fn check_writes_report_to_output_file() {
    let fixture = TestFixture::new();
    fixture.create_suite(PASSING_SUITE);
    fixture.create_invoice_sources();

    evidence_guard!()
        .current_dir(fixture.path())
        .args(["check", "--format", "json", "--output", "out/report.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(fixture.path().join("out/report.json")).unwrap();
    let report: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["success"], true);
}

#[test]
fn check_explicit_suite_and_root() {
    let fixture = TestFixture::new();
    fixture.create_file("suites/audit.toml", PASSING_SUITE);
    fixture.create_invoice_sources();

    evidence_guard!()
        .current_dir(fixture.path())
        .args(["check", "--suite", "suites/audit.toml", "--root", "."])
        .assert()
        .success();
}

#[test]
fn check_suite_relative_root_by_default() {
    let fixture = TestFixture::new();
    fixture.create_file("suites/audit.toml", PASSING_SUITE);
    fixture.create_invoice_sources();

    evidence_guard!()
        .current_dir(fixture.path())
        .args(["check", "--suite", "suites/audit.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("lib/billing/invoice.dart"));
}

#[test]
fn check_fail_fast_skips_remaining() {
    let fixture = TestFixture::new();
    fixture.create_suite(
        r#"
[[tests]]
name = "Broken"
artifacts = ["missing.txt"]
policy = "hard"

[[tests]]
name = "Later"
artifacts = ["lib/billing/invoice.dart"]
policy = "hard"
"#,
    );
    fixture.create_invoice_sources();

    let report = json_report(&fixture, &["--fail-fast", "--jobs", "1"]);

    assert_eq!(report["results"][1]["status"], "SKIP");
    assert_eq!(
        report["results"][1]["message"],
        "Run cancelled before this test started"
    );
}

#[test]
fn check_disabled_test_is_skipped() {
    let fixture = TestFixture::new();
    fixture.create_suite(
        r#"
[[tests]]
name = "Off"
artifacts = ["missing.txt"]
policy = "hard"
enabled = false
"#,
    );

    let report = json_report(&fixture, &[]);

    assert_eq!(report["results"][0]["status"], "SKIP");
    assert_eq!(report["results"][0]["message"], "Test disabled");
    assert_eq!(report["success"], true);
}

#[test]
fn check_verbose_shows_details() {
    let fixture = TestFixture::new();
    fixture.create_suite(PASSING_SUITE);
    fixture.create_invoice_sources();

    evidence_guard!()
        .current_dir(fixture.path())
        .args(["-v", "check", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("coverage: 100.0"));
}

#[test]
fn check_misconfigured_suite_exits_two() {
    let fixture = TestFixture::new();
    fixture.create_suite(
        r#"
[[tests]]
name = "Inverted"
artifacts = ["a.txt"]
policy = "soft"
warn_threshold = 20.0
fail_threshold = 50.0
"#,
    );

    evidence_guard!()
        .current_dir(fixture.path())
        .args(["check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid test definition 'Inverted'"));
}

#[test]
fn check_without_suite_exits_two() {
    let fixture = TestFixture::new();

    evidence_guard!()
        .current_dir(fixture.path())
        .env("XDG_CONFIG_HOME", fixture.path().join("config"))
        .env("HOME", fixture.path())
        .args(["check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No suite file found"));
}

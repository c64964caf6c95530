use serde_json::{Map, json};

use super::*;

fn result(name: &str, status: Verdict, message: &str) -> TestResult {
    TestResult::new(name, status, message, Map::new())
}

fn sample_results() -> Vec<TestResult> {
    let mut details = Map::new();
    details.insert("coverage".to_string(), json!(60.0));
    details.insert("policy".to_string(), json!("soft"));

    vec![
        result("Invoice Model", Verdict::Pass, "All 3 patterns found"),
        result("Missing File", Verdict::Fail, "Error reading artifact 'missing.txt': artifact not found: missing.txt"),
        TestResult::new(
            "Security",
            Verdict::Warning,
            "Coverage below threshold: 60.0% (6/10 patterns found)",
            details,
        ),
        TestResult::skipped("Disabled", "Test disabled"),
    ]
}

#[test]
fn lists_every_result_in_order() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_results())
        .unwrap();

    let pass = output.find("✅ PASS: Invoice Model").unwrap();
    let fail = output.find("❌ FAIL: Missing File").unwrap();
    let warn = output.find("⚠️ WARNING: Security").unwrap();
    let skip = output.find("⏭️ SKIP: Disabled").unwrap();
    assert!(pass < fail && fail < warn && warn < skip);
}

#[test]
fn summary_counts_each_status() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_results())
        .unwrap();

    assert!(output.contains("Summary: 4 tests, 1 passed, 1 warnings, 1 failed, 1 skipped"));
    assert!(output.contains("Failed tests:\n  - Missing File: Error reading artifact 'missing.txt'"));
    assert!(output.contains("Warnings:\n  - Security: Coverage below threshold"));
    assert!(output.contains("Overall: FAILED"));
}

#[test]
fn all_passing_run_is_passed() {
    let results = vec![
        result("A", Verdict::Pass, "All 1 patterns found"),
        TestResult::skipped("B", "Test disabled"),
    ];
    let output = TextFormatter::new(ColorMode::Never).format(&results).unwrap();

    assert!(output.contains("Overall: PASSED"));
    assert!(!output.contains("Failed tests:"));
    assert!(!output.contains("Warnings:"));
}

#[test]
fn details_only_when_verbose() {
    let quiet = TextFormatter::new(ColorMode::Never)
        .format(&sample_results())
        .unwrap();
    assert!(!quiet.contains("coverage: 60.0"));

    let verbose = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&sample_results())
        .unwrap();
    assert!(verbose.contains("   coverage: 60.0"));
    assert!(verbose.contains("   policy: soft"));
}

#[test]
fn colors_only_when_enabled() {
    let plain = TextFormatter::new(ColorMode::Never)
        .format(&sample_results())
        .unwrap();
    assert!(!plain.contains("\x1b["));

    let colored = TextFormatter::new(ColorMode::Always)
        .format(&sample_results())
        .unwrap();
    assert!(colored.contains("\x1b[31mFAIL\x1b[0m"));
    assert!(colored.contains("\x1b[32mPASS\x1b[0m"));
}

#[test]
fn empty_run_reports_zero_tests() {
    let output = TextFormatter::new(ColorMode::Never).format(&[]).unwrap();
    assert!(output.contains("Summary: 0 tests"));
    assert!(output.contains("Overall: PASSED"));
}

use super::*;
use crate::artifact::MemoryArtifactSource;
use crate::checker::{ClassificationPolicy, Verdict};
use crate::registry::CheckGroup;
use crate::runner::{TestDefinition, run_suite};

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_TESTS_FAILED);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_TESTS_FAILED, EXIT_CONFIG_ERROR);
}

#[test]
fn library_runs_a_suite_end_to_end() {
    let source = MemoryArtifactSource::new()
        .with_artifact("a.txt", "alpha beta")
        .with_artifact("b.txt", "gamma");
    let group = CheckGroup::define("core", [("alpha", "alpha"), ("gamma", "gamma")]);
    let definitions = vec![
        TestDefinition::builder("Found", ClassificationPolicy::Hard)
            .artifact("a.txt")
            .artifact("b.txt")
            .checks(&group)
            .build()
            .unwrap(),
        TestDefinition::builder("Absent", ClassificationPolicy::Hard)
            .artifact("missing.txt")
            .checks(&group)
            .build()
            .unwrap(),
    ];

    let log = run_suite(&definitions, &source);

    let statuses: Vec<_> = log.iter().map(|r| r.status()).collect();
    assert_eq!(statuses, [Verdict::Pass, Verdict::Fail]);
    assert!(!log.overall_success());
    assert_eq!(log.summary().fail, 1);
}

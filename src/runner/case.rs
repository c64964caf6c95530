use std::error::Error as _;
use std::fmt::Write;

use indexmap::IndexMap;
use serde_json::{Map, Value, json};

use crate::artifact::{ArtifactContent, ArtifactSource};
use crate::checker::{ClassificationPolicy, Verdict, classify};
use crate::error::ArtifactError;
use crate::evaluator::{CompiledGroup, EvaluationOutcome, evaluate_any};

use super::definition::{ArtifactCombine, EACH_SEPARATOR, Metric, MetricReduce, TestDefinition};
use super::result::TestResult;

/// Failed check names listed in a FAIL message before truncating.
const MAX_LISTED_CHECKS: usize = 5;

/// Artifacts that loaded, plus optional ones that did not.
struct LoadedArtifacts {
    contents: Vec<ArtifactContent>,
    missing: Vec<String>,
}

impl LoadedArtifacts {
    fn get(&self, id: &str) -> Option<&ArtifactContent> {
        self.contents.iter().find(|c| c.id() == id)
    }
}

/// Run one test case and produce its result.
///
/// Never fails: an unavailable required artifact becomes a FAIL result naming
/// the artifact, and an unusable pattern only fails its own check.
#[must_use]
pub fn run(definition: &TestDefinition, source: &dyn ArtifactSource) -> TestResult {
    let name = definition.name();
    if !definition.is_enabled() {
        return TestResult::skipped(name, "Test disabled");
    }

    let loaded = match load_artifacts(definition, source) {
        Ok(loaded) => loaded,
        Err(error) => return unavailable(definition, &error),
    };

    let compiled = CompiledGroup::compile(definition.checks());
    let (outcome, breakdown) = match definition.combine() {
        ArtifactCombine::Any => (compiled.evaluate_any(&loaded.contents), None),
        ArtifactCombine::Each => {
            let (outcome, breakdown) = evaluate_each(definition, &compiled, &loaded);
            (outcome, Some(breakdown))
        }
    };

    let verdict = classify(&outcome, definition.policy());
    let message = message_for(verdict, definition.policy(), &outcome);
    tracing::debug!(
        test = name,
        status = %verdict,
        passed = outcome.passed().len(),
        failed = outcome.failed().len(),
        "test case evaluated"
    );

    let mut details = outcome_details(definition, &outcome);
    if let Some(breakdown) = breakdown {
        details.insert("artifacts".to_string(), Value::Object(breakdown));
    }
    if !loaded.missing.is_empty() {
        details.insert("missing_artifacts".to_string(), json!(loaded.missing));
    }
    if !definition.metrics().is_empty() {
        let metrics = definition
            .metrics()
            .iter()
            .map(|m| (m.name.clone(), metric_value(m, &loaded.contents)))
            .collect();
        details.insert("metrics".to_string(), Value::Object(metrics));
    }

    TestResult::new(name, verdict, message, details)
}

fn load_artifacts(
    definition: &TestDefinition,
    source: &dyn ArtifactSource,
) -> Result<LoadedArtifacts, ArtifactError> {
    let mut loaded = LoadedArtifacts {
        contents: Vec::with_capacity(definition.artifacts().len()),
        missing: Vec::new(),
    };
    for id in definition.artifacts() {
        match ArtifactContent::load(source, id) {
            Ok(content) => loaded.contents.push(content),
            Err(error) if definition.is_optional(id) => {
                tracing::info!(test = definition.name(), artifact = %id, "optional artifact unavailable: {error}");
                loaded.missing.push(id.clone());
            }
            Err(error) => return Err(error),
        }
    }
    Ok(loaded)
}

fn describe(error: &ArtifactError) -> String {
    match error.source() {
        Some(source) => format!("{error}: {source}"),
        None => error.to_string(),
    }
}

fn unavailable(definition: &TestDefinition, error: &ArtifactError) -> TestResult {
    let description = describe(error);
    tracing::warn!(test = definition.name(), artifact = error.id(), "{description}");

    let mut details = Map::new();
    details.insert("artifact".to_string(), json!(error.id()));
    details.insert("error".to_string(), json!(description));
    TestResult::new(
        definition.name(),
        Verdict::Fail,
        format!("Error reading artifact '{}': {description}", error.id()),
        details,
    )
}

fn evaluate_each(
    definition: &TestDefinition,
    compiled: &CompiledGroup,
    loaded: &LoadedArtifacts,
) -> (EvaluationOutcome, Map<String, Value>) {
    let mut outcome = EvaluationOutcome::default();
    let mut breakdown = Map::new();
    for id in definition.artifacts() {
        let (per_artifact, exists) = loaded
            .get(id)
            .map_or_else(|| (compiled.all_failed(), false), |c| (compiled.evaluate(c.text()), true));
        breakdown.insert(
            id.clone(),
            json!({
                "passed": per_artifact.passed().len(),
                "failed": per_artifact.failed().len(),
                "exists": exists,
            }),
        );
        outcome.absorb_prefixed(id, per_artifact);
    }
    (outcome, breakdown)
}

/// Outcome names a check maps to: itself, or one per artifact in `each` mode.
fn outcome_names(definition: &TestDefinition, check: &str) -> Vec<String> {
    match definition.combine() {
        ArtifactCombine::Any => vec![check.to_string()],
        ArtifactCombine::Each => definition
            .artifacts()
            .iter()
            .map(|id| format!("{id}{EACH_SEPARATOR}{check}"))
            .collect(),
    }
}

fn category_scores(definition: &TestDefinition, outcome: &EvaluationOutcome) -> Map<String, Value> {
    let mut scores: IndexMap<&str, (usize, usize)> = IndexMap::new();
    for check in definition.checks().iter() {
        let Some(category) = check.category.as_deref() else {
            continue;
        };
        let score = scores.entry(category).or_default();
        for name in outcome_names(definition, &check.name) {
            score.1 += 1;
            if outcome.is_passed(&name) {
                score.0 += 1;
            }
        }
    }
    scores
        .into_iter()
        .map(|(category, (passed, total))| (category.to_string(), json!(format!("{passed}/{total}"))))
        .collect()
}

fn outcome_details(definition: &TestDefinition, outcome: &EvaluationOutcome) -> Map<String, Value> {
    let coverage = (outcome.coverage() * 10.0).round() / 10.0;
    let mut details = Map::new();
    details.insert("policy".to_string(), json!(definition.policy().name()));
    details.insert("coverage".to_string(), json!(coverage));
    details.insert("passed".to_string(), json!(outcome.passed().len()));
    details.insert("failed".to_string(), json!(outcome.failed().len()));
    if !outcome.failed().is_empty() {
        details.insert("failed_checks".to_string(), json!(outcome.failed()));
    }
    if !outcome.errors().is_empty() {
        details.insert("pattern_errors".to_string(), json!(outcome.errors()));
    }
    let categories = category_scores(definition, outcome);
    if !categories.is_empty() {
        details.insert("categories".to_string(), Value::Object(categories));
    }
    details
}

fn metric_value(metric: &Metric, contents: &[ArtifactContent]) -> Value {
    let outcome = evaluate_any(contents, &metric.checks);
    match metric.reduce {
        MetricReduce::Any => json!(!outcome.passed().is_empty()),
        MetricReduce::All => json!(outcome.failed().is_empty()),
        MetricReduce::Count => json!(format!("{}/{}", outcome.passed().len(), outcome.total())),
    }
}

fn missing_list(outcome: &EvaluationOutcome) -> String {
    let mut listed = outcome
        .failed()
        .iter()
        .take(MAX_LISTED_CHECKS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let remaining = outcome.failed().len().saturating_sub(MAX_LISTED_CHECKS);
    if remaining > 0 {
        let _ = write!(listed, " (+{remaining} more)");
    }
    listed
}

fn message_for(verdict: Verdict, policy: ClassificationPolicy, outcome: &EvaluationOutcome) -> String {
    let passed = outcome.passed().len();
    let total = outcome.total();
    let coverage = outcome.coverage();
    match verdict {
        Verdict::Pass if total == 0 => "No checks defined".to_string(),
        Verdict::Pass if outcome.failed().is_empty() => format!("All {total} patterns found"),
        Verdict::Pass => format!("{passed}/{total} patterns found ({coverage:.1}% coverage)"),
        Verdict::Warning => format!(
            "Coverage below threshold: {coverage:.1}% ({passed}/{total} patterns found)"
        ),
        Verdict::Fail if policy.is_soft() => format!(
            "Coverage below fail threshold: {coverage:.1}%, missing: {}",
            missing_list(outcome)
        ),
        Verdict::Fail => format!("Missing patterns: {}", missing_list(outcome)),
        Verdict::Skip => "Skipped".to_string(),
    }
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;

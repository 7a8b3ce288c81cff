//! End-to-end scenarios for rule selection over task metadata.
//!
//! These tests pin the externally observable contract of the selector: the
//! universal rules, the type and context tables, stack scoping, keyword
//! sensitivity, and set semantics.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use rulebook::rules::selection::select_rules;
use rulebook::task::domain::{StackName, TaskContext, TaskMetadata, TaskPriority, TaskType};

fn assert_contains_all(metadata: &TaskMetadata, expected: &[&str]) {
    let selected = select_rules(metadata);
    for id in expected {
        assert!(
            selected.contains_str(id),
            "expected '{id}' in selection {selected:?}"
        );
    }
}

#[test]
fn bug_on_web_with_react_stack() {
    let metadata = TaskMetadata::new()
        .with_type(TaskType::Bug)
        .with_context(TaskContext::Web)
        .with_stack(StackName::new("react").expect("valid stack"))
        .with_description("submit button not responding");

    assert_contains_all(
        &metadata,
        &[
            "code-quality",
            "testing",
            "documentation",
            "bug-fix",
            "web-development",
            "accessibility",
            "performance",
            "stacks/react",
        ],
    );
}

#[test]
fn production_deploy_on_fullstack() {
    let metadata = TaskMetadata::new()
        .with_type(TaskType::Deploy)
        .with_context(TaskContext::Fullstack)
        .with_description("deploy to production");

    assert_contains_all(
        &metadata,
        &[
            "code-quality",
            "testing",
            "documentation",
            "ci-cd",
            "monitoring",
            "api-development",
            "web-development",
            "security",
        ],
    );
}

#[test]
fn jwt_feature_on_api_with_nestjs_stack() {
    let metadata = TaskMetadata::new()
        .with_type(TaskType::Feature)
        .with_context(TaskContext::Api)
        .with_stack(StackName::new("nestjs").expect("valid stack"))
        .with_description("implement JWT authentication");

    // `security` arrives via both the api context and the keyword scan;
    // set semantics collapse the duplicate.
    let selected = select_rules(&metadata);
    assert_eq!(
        selected
            .iter()
            .filter(|rule| rule.as_str() == "security")
            .count(),
        1
    );
    assert_contains_all(
        &metadata,
        &[
            "code-quality",
            "testing",
            "documentation",
            "feature-development",
            "api-development",
            "security",
            "stacks/nestjs",
        ],
    );
}

#[test]
fn selection_is_idempotent_across_calls() {
    let metadata = TaskMetadata::new()
        .with_type(TaskType::Refactor)
        .with_context(TaskContext::Mobile)
        .with_priority(TaskPriority::Low)
        .with_description("extract the navigation stack into a module");

    assert_eq!(select_rules(&metadata), select_rules(&metadata));
}

#[test]
fn default_metadata_matches_explicit_defaults() {
    let explicit = TaskMetadata::new()
        .with_type(TaskType::Feature)
        .with_context(TaskContext::Web)
        .with_priority(TaskPriority::Medium);

    assert_eq!(select_rules(&TaskMetadata::new()), select_rules(&explicit));
}

#[test]
fn security_keywords_are_detected_and_absent_otherwise() {
    let sensitive = TaskMetadata::new()
        .with_type(TaskType::Chore)
        .with_context(TaskContext::Desktop)
        .with_description("reset user password via token");
    let mundane = TaskMetadata::new()
        .with_type(TaskType::Chore)
        .with_context(TaskContext::Desktop)
        .with_description("update footer copy");

    assert!(select_rules(&sensitive).contains_str("security"));
    assert!(!select_rules(&mundane).contains_str("security"));
}

#[test]
fn priority_does_not_influence_selection() {
    let low = TaskMetadata::new().with_priority(TaskPriority::Low);
    let critical = TaskMetadata::new().with_priority(TaskPriority::Critical);
    assert_eq!(select_rules(&low), select_rules(&critical));
}

//! Domain-focused tests for task document behaviour.

use crate::rules::selection::select_rules;
use crate::task::domain::{
    PersistedTaskData, StackName, TaskContext, TaskDocument, TaskDomainError, TaskId,
    TaskMetadata, TaskPriority, TaskState, TaskType,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn stack_name_normalizes_case_and_whitespace() {
    let stack = StackName::new("  NestJS ").expect("valid stack name");
    assert_eq!(stack.as_str(), "nestjs");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("not a stack")]
#[case("stack_name")]
fn stack_name_rejects_invalid_values(#[case] value: &str) {
    assert_eq!(
        StackName::new(value),
        Err(TaskDomainError::InvalidStackName(value.to_owned()))
    );
}

#[rstest]
fn metadata_defaults_encode_fallback_values() {
    let metadata = TaskMetadata::new();
    assert_eq!(metadata.task_type(), TaskType::Feature);
    assert_eq!(metadata.context(), TaskContext::Web);
    assert_eq!(metadata.priority(), TaskPriority::Medium);
    assert!(metadata.stack().is_none());
    assert!(metadata.description().is_empty());
}

#[rstest]
#[case("feature", TaskType::Feature)]
#[case(" BUG ", TaskType::Bug)]
#[case("Deploy", TaskType::Deploy)]
fn task_type_parses_case_insensitively(#[case] value: &str, #[case] expected: TaskType) {
    assert_eq!(TaskType::try_from(value), Ok(expected));
}

#[rstest]
fn task_type_rejects_unknown_value() {
    assert!(TaskType::try_from("epic").is_err());
}

#[rstest]
fn task_document_rejects_empty_title(clock: DefaultClock) {
    let metadata = TaskMetadata::new();
    let rules = select_rules(&metadata);
    let result = TaskDocument::new("   ", metadata, rules, &clock);
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn task_document_starts_in_todo_with_equal_timestamps(clock: DefaultClock) {
    let metadata = TaskMetadata::new()
        .with_type(TaskType::Bug)
        .with_description("submit button not responding");
    let rules = select_rules(&metadata);
    let task =
        TaskDocument::new("Fix submit button", metadata, rules, &clock).expect("valid task");

    assert_eq!(task.state(), TaskState::Todo);
    assert_eq!(task.created_at(), task.updated_at());
    assert!(task.rules().contains_str("bug-fix"));
}

#[rstest]
fn set_state_touches_updated_at(clock: DefaultClock) {
    let metadata = TaskMetadata::new();
    let rules = select_rules(&metadata);
    let mut task = TaskDocument::new("Ship it", metadata, rules, &clock).expect("valid task");
    let created = task.created_at();

    task.set_state(TaskState::InProgress, &clock);

    assert_eq!(task.state(), TaskState::InProgress);
    assert!(task.updated_at() >= created);
}

#[rstest]
fn task_document_round_trips_through_persisted_data(clock: DefaultClock) {
    let metadata = TaskMetadata::new()
        .with_type(TaskType::Feature)
        .with_context(TaskContext::Api)
        .with_stack(StackName::new("nestjs").expect("valid stack name"))
        .with_priority(TaskPriority::High)
        .with_description("implement JWT authentication");
    let rules = select_rules(&metadata);
    let mut task =
        TaskDocument::new("Implement JWT authentication", metadata, rules, &clock)
            .expect("valid task");
    task.set_state(TaskState::InProgress, &clock);

    let rebuilt = TaskDocument::from_persisted(PersistedTaskData {
        id: task.id(),
        title: task.title().to_owned(),
        metadata: task.metadata().clone(),
        rules: task.rules().clone(),
        state: task.state(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    });

    assert_eq!(rebuilt, task);
}

#[rstest]
fn task_id_round_trips_through_uuid() {
    let id = TaskId::new();
    assert_eq!(TaskId::from_uuid(id.into_inner()), id);
}

#[rstest]
fn metadata_serializes_with_snake_case_fields() {
    let metadata = TaskMetadata::new()
        .with_type(TaskType::Bug)
        .with_context(TaskContext::Fullstack)
        .with_stack(StackName::new("react").expect("valid stack name"))
        .with_priority(TaskPriority::Critical)
        .with_description("submit button not responding");

    let value = serde_json::to_value(&metadata).expect("serialize metadata");
    assert_eq!(value.get("type"), Some(&serde_json::json!("bug")));
    assert_eq!(value.get("context"), Some(&serde_json::json!("fullstack")));
    assert_eq!(value.get("priority"), Some(&serde_json::json!("critical")));

    let round_tripped: TaskMetadata =
        serde_json::from_value(value).expect("deserialize metadata");
    assert_eq!(round_tripped, metadata);
}

#[rstest]
fn metadata_deserializes_missing_fields_to_defaults() {
    let metadata: TaskMetadata =
        serde_json::from_value(serde_json::json!({})).expect("deserialize empty object");
    assert_eq!(metadata, TaskMetadata::new());
}

#[rstest]
fn task_state_round_trips_through_storage_representation() {
    for state in [
        TaskState::Todo,
        TaskState::InProgress,
        TaskState::Blocked,
        TaskState::Done,
    ] {
        assert_eq!(TaskState::try_from(state.as_str()), Ok(state));
    }
}

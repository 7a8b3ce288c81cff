//! Service-level tests for the authoring flow against the in-memory
//! repository.

use crate::task::adapters::memory::InMemoryTaskRepository;
use crate::task::domain::{StackName, TaskId, TaskState};
use crate::task::parse::ParseWarning;
use crate::task::ports::TaskRepository;
use crate::task::services::{TaskAuthoringError, TaskAuthoringService};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::sync::Arc;

type Service = TaskAuthoringService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn harness() -> (Service, Arc<InMemoryTaskRepository>) {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = TaskAuthoringService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    (service, repository)
}

#[rstest]
#[tokio::test]
async fn create_task_selects_rules_and_stores_document(harness: (Service, Arc<InMemoryTaskRepository>)) {
    let (service, repository) = harness;
    let body = "---\ntype: bug\ncontext: web\nstack: react\npriority: high\ndescription: submit button not responding\n---\n";

    let authored = service
        .create_task("Fix submit button", body)
        .await
        .expect("task authored");

    assert!(authored.warnings.is_empty());
    assert!(authored.document.rules().contains_str("bug-fix"));
    assert!(authored.document.rules().contains_str("stacks/react"));
    assert!(authored.markdown.contains("## Rules to apply"));

    let stored = repository
        .find_by_id(authored.document.id())
        .await
        .expect("lookup succeeds")
        .expect("task stored");
    assert_eq!(stored, authored.document);
}

#[rstest]
#[tokio::test]
async fn create_task_reports_metadata_gaps(harness: (Service, Arc<InMemoryTaskRepository>)) {
    let (service, _) = harness;

    let authored = service
        .create_task("Mystery work", "No front matter here, only prose.\n")
        .await
        .expect("task authored");

    assert!(
        authored
            .warnings
            .contains(&ParseWarning::MissingField { field: "type" })
    );
    // Defaults still produce a full selection.
    assert!(authored.document.rules().contains_str("code-quality"));
    assert!(authored.document.rules().contains_str("web-development"));
}

#[rstest]
#[tokio::test]
async fn create_task_rejects_empty_title(harness: (Service, Arc<InMemoryTaskRepository>)) {
    let (service, _) = harness;
    let result = service.create_task("  ", "type: chore\n").await;
    assert!(matches!(result, Err(TaskAuthoringError::Domain(_))));
}

#[rstest]
#[tokio::test]
async fn set_state_persists_transition(harness: (Service, Arc<InMemoryTaskRepository>)) {
    let (service, repository) = harness;
    let authored = service
        .create_task("Ship it", "type: deploy\ncontext: fullstack\npriority: critical\ndescription: deploy to production\n")
        .await
        .expect("task authored");

    let updated = service
        .set_state(authored.document.id(), TaskState::InProgress)
        .await
        .expect("state updated");
    assert_eq!(updated.state(), TaskState::InProgress);

    let in_progress = repository
        .find_by_state(TaskState::InProgress)
        .await
        .expect("lookup succeeds");
    assert_eq!(in_progress.len(), 1);

    let todo = repository
        .find_by_state(TaskState::Todo)
        .await
        .expect("lookup succeeds");
    assert!(todo.is_empty());
}

#[rstest]
#[tokio::test]
async fn set_state_for_unknown_task_fails(harness: (Service, Arc<InMemoryTaskRepository>)) {
    let (service, _) = harness;
    let result = service.set_state(TaskId::new(), TaskState::Done).await;
    assert!(matches!(result, Err(TaskAuthoringError::Repository(_))));
}

#[rstest]
#[tokio::test]
async fn find_by_stack_returns_matching_tasks(harness: (Service, Arc<InMemoryTaskRepository>)) {
    let (service, repository) = harness;
    service
        .create_task("API task", "type: feature\ncontext: api\nstack: nestjs\ndescription: implement JWT authentication\npriority: high\n")
        .await
        .expect("task authored");
    service
        .create_task("Web task", "type: feature\ncontext: web\ndescription: add footer\npriority: low\n")
        .await
        .expect("task authored");

    let stack = StackName::new("nestjs").expect("valid stack");
    let matching = repository
        .find_by_stack(&stack)
        .await
        .expect("lookup succeeds");
    assert_eq!(matching.len(), 1);
    assert_eq!(
        matching.first().map(|task| task.title()),
        Some("API task")
    );
}

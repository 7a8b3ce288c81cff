//! Service layer for authoring tasks from raw Markdown input.

use crate::rules::selection::select_rules;
use crate::task::{
    domain::{TaskDocument, TaskDomainError, TaskId, TaskState},
    parse::{ParseWarning, parse_front_matter},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::render::{RenderError, render_task_document},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task authoring operations.
#[derive(Debug, Error)]
pub enum TaskAuthoringError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Markdown generation failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type for task authoring service operations.
pub type TaskAuthoringResult<T> = Result<T, TaskAuthoringError>;

/// Outcome of authoring a task: the stored document, its generated
/// Markdown, and any metadata gaps the author should be prompted to fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoredTask {
    /// The stored task document.
    pub document: TaskDocument,
    /// The generated task Markdown, including the "Rules to apply" section.
    pub markdown: String,
    /// Metadata gaps and unrecognized values found while parsing.
    pub warnings: Vec<ParseWarning>,
}

/// Task authoring orchestration service.
///
/// Drives the full docs-as-context flow: parse front matter, fill defaults,
/// select applicable rules, persist the document, and render the generated
/// Markdown.
#[derive(Clone)]
pub struct TaskAuthoringService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskAuthoringService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task authoring service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Authors a task from its title and raw Markdown body.
    ///
    /// Metadata parsing never fails; gaps degrade to defaults and surface in
    /// [`AuthoredTask::warnings`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskAuthoringError`] when the title is invalid, rendering
    /// fails, or the repository rejects persistence.
    pub async fn create_task(
        &self,
        title: impl Into<String> + Send,
        body: &str,
    ) -> TaskAuthoringResult<AuthoredTask> {
        let (metadata, warnings) = parse_front_matter(body).into_parts();
        let rules = select_rules(&metadata);
        let document = TaskDocument::new(title, metadata, rules, &*self.clock)?;
        let markdown = render_task_document(&document)?;
        self.repository.store(&document).await?;
        Ok(AuthoredTask {
            document,
            markdown,
            warnings,
        })
    }

    /// Moves a stored task to a new lifecycle state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskAuthoringError::Repository`] when the task does not
    /// exist or persistence fails.
    pub async fn set_state(
        &self,
        id: TaskId,
        state: TaskState,
    ) -> TaskAuthoringResult<TaskDocument> {
        let mut document = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        document.set_state(state, &*self.clock);
        self.repository.update(&document).await?;
        Ok(document)
    }

    /// Retrieves a stored task by identifier.
    ///
    /// Returns `Ok(None)` when no task exists for the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when persistence lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskDocument>> {
        self.repository.find_by_id(id).await
    }
}

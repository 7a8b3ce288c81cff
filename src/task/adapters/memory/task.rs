//! In-memory repository for task authoring tests and embedded use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{StackName, TaskDocument, TaskId, TaskState},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, TaskDocument>,
    state_index: HashMap<&'static str, Vec<TaskId>>,
    stack_index: HashMap<String, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn index_task(state: &mut InMemoryTaskState, task: &TaskDocument) {
    state
        .state_index
        .entry(task.state().as_str())
        .or_default()
        .push(task.id());
    if let Some(stack) = task.metadata().stack() {
        state
            .stack_index
            .entry(stack.as_str().to_owned())
            .or_default()
            .push(task.id());
    }
}

fn unindex_task(state: &mut InMemoryTaskState, task: &TaskDocument) {
    remove_from_state_index(&mut state.state_index, task.id(), task.state().as_str());
    if let Some(stack) = task.metadata().stack() {
        remove_from_stack_index(&mut state.stack_index, task.id(), stack.as_str());
    }
}

/// Removes a task ID from the state index, cleaning up the entry if empty.
fn remove_from_state_index(
    index: &mut HashMap<&'static str, Vec<TaskId>>,
    task_id: TaskId,
    key: &str,
) {
    if let Some(ids) = index.get_mut(key) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

/// Removes a task ID from the stack index, cleaning up the entry if empty.
fn remove_from_stack_index(index: &mut HashMap<String, Vec<TaskId>>, task_id: TaskId, key: &str) {
    if let Some(ids) = index.get_mut(key) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

/// Helper to look up tasks by a list of indexed IDs.
fn collect_by_ids(state: &InMemoryTaskState, ids: Option<&Vec<TaskId>>) -> Vec<TaskDocument> {
    ids.map(|ids| {
        ids.iter()
            .filter_map(|id| state.tasks.get(id).cloned())
            .collect()
    })
    .unwrap_or_default()
}

fn lock_poisoned(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &TaskDocument) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        index_task(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &TaskDocument) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_poisoned)?;

        let old_task = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .clone();

        // Drop stale index entries before adding updated ones.
        unindex_task(&mut state, &old_task);
        index_task(&mut state, task);
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskDocument>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_state(&self, state_key: TaskState) -> TaskRepositoryResult<Vec<TaskDocument>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(collect_by_ids(
            &state,
            state.state_index.get(state_key.as_str()),
        ))
    }

    async fn find_by_stack(&self, stack: &StackName) -> TaskRepositoryResult<Vec<TaskDocument>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(collect_by_ids(&state, state.stack_index.get(stack.as_str())))
    }
}

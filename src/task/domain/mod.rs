//! Domain model for task documents and their metadata.
//!
//! The task domain models the structured metadata attached to a task
//! document, the authored task aggregate, and its lifecycle state while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod metadata;
mod task;

pub use error::{
    ParseTaskContextError, ParseTaskPriorityError, ParseTaskStateError, ParseTaskTypeError,
    TaskDomainError,
};
pub use ids::{StackName, TaskId};
pub use metadata::{TaskContext, TaskMetadata, TaskPriority, TaskType};
pub use task::{PersistedTaskData, TaskDocument, TaskState};

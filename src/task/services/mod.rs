//! Application services for task authoring.

mod authoring;
mod render;

pub use authoring::{AuthoredTask, TaskAuthoringError, TaskAuthoringResult, TaskAuthoringService};
pub use render::{RenderError, render_task_document};

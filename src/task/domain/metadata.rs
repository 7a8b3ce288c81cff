//! Structured metadata attached to a task document.

use super::{ParseTaskContextError, ParseTaskPriorityError, ParseTaskTypeError, StackName};
use serde::{Deserialize, Serialize};

/// Kind of work a task describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// New functionality.
    #[default]
    Feature,
    /// Defect to fix.
    Bug,
    /// Deployment or release work.
    Deploy,
    /// Restructuring without behaviour change.
    Refactor,
    /// Test authoring or improvement.
    Test,
    /// Routine maintenance.
    Chore,
    /// Documentation work.
    Documentation,
}

impl TaskType {
    /// Returns the canonical front-matter representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bug => "bug",
            Self::Deploy => "deploy",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Documentation => "documentation",
        }
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "feature" => Ok(Self::Feature),
            "bug" => Ok(Self::Bug),
            "deploy" => Ok(Self::Deploy),
            "refactor" => Ok(Self::Refactor),
            "test" => Ok(Self::Test),
            "chore" => Ok(Self::Chore),
            "documentation" => Ok(Self::Documentation),
            _ => Err(ParseTaskTypeError(value.to_owned())),
        }
    }
}

/// Delivery surface a task targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskContext {
    /// Backend API work.
    Api,
    /// Mobile application work.
    Mobile,
    /// Web frontend work.
    #[default]
    Web,
    /// Desktop application work.
    Desktop,
    /// AI or model-integration work.
    Ai,
    /// MCP server or tooling work.
    Mcp,
    /// Work spanning backend and frontend.
    Fullstack,
}

impl TaskContext {
    /// Returns the canonical front-matter representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Mobile => "mobile",
            Self::Web => "web",
            Self::Desktop => "desktop",
            Self::Ai => "ai",
            Self::Mcp => "mcp",
            Self::Fullstack => "fullstack",
        }
    }
}

impl TryFrom<&str> for TaskContext {
    type Error = ParseTaskContextError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "api" => Ok(Self::Api),
            "mobile" => Ok(Self::Mobile),
            "web" => Ok(Self::Web),
            "desktop" => Ok(Self::Desktop),
            "ai" => Ok(Self::Ai),
            "mcp" => Ok(Self::Mcp),
            "fullstack" => Ok(Self::Fullstack),
            _ => Err(ParseTaskContextError(value.to_owned())),
        }
    }
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal scheduling.
    #[default]
    Medium,
    /// Should be picked up soon.
    High,
    /// Drop everything.
    Critical,
}

impl TaskPriority {
    /// Returns the canonical front-matter representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Structured metadata attached to a task document.
///
/// Immutable value object; defaults encode the documented fallback values
/// (`feature` / `web` / `medium`) so incomplete metadata degrades instead of
/// failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskMetadata {
    #[serde(rename = "type")]
    task_type: TaskType,
    context: TaskContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<StackName>,
    priority: TaskPriority,
    description: String,
}

impl TaskMetadata {
    /// Creates metadata with all fields at their documented defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the task type.
    #[must_use]
    pub const fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }

    /// Sets the task context.
    #[must_use]
    pub const fn with_context(mut self, context: TaskContext) -> Self {
        self.context = context;
        self
    }

    /// Sets the technology stack.
    #[must_use]
    pub fn with_stack(mut self, stack: StackName) -> Self {
        self.stack = Some(stack);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the task type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the task context.
    #[must_use]
    pub const fn context(&self) -> TaskContext {
        self.context
    }

    /// Returns the technology stack, if any.
    #[must_use]
    pub const fn stack(&self) -> Option<&StackName> {
        self.stack.as_ref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

//! Rendering authored tasks back into generated task Markdown.

use crate::rules::domain::RuleId;
use crate::task::domain::{StackName, TaskDocument};
use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

/// Generated task document template.
///
/// The "Rules to apply" section lists the selected rule identifiers in the
/// deterministic iteration order of the rule set.
const TASK_TEMPLATE: &str = "\
# {{ title }}

- **Type**: {{ task_type }}
- **Context**: {{ context }}
- **Priority**: {{ priority }}
- **Status**: {{ state }}
{%- if stack %}
- **Stack**: {{ stack }}
{%- endif %}

## Description

{{ description }}

## Rules to apply

{% for rule in rules -%}
- {{ rule }}
{% endfor -%}
";

/// Error returned when template rendering fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render task document: {reason}")]
pub struct RenderError {
    /// Underlying template engine failure description.
    pub reason: String,
}

#[derive(Serialize)]
struct TemplateContext<'a> {
    title: &'a str,
    task_type: &'a str,
    context: &'a str,
    priority: &'a str,
    state: &'a str,
    stack: Option<&'a str>,
    description: &'a str,
    rules: Vec<&'a str>,
}

/// Renders the generated Markdown for an authored task document.
///
/// # Errors
///
/// Returns [`RenderError`] when the template engine rejects the context.
pub fn render_task_document(task: &TaskDocument) -> Result<String, RenderError> {
    let metadata = task.metadata();
    let context = TemplateContext {
        title: task.title(),
        task_type: metadata.task_type().as_str(),
        context: metadata.context().as_str(),
        priority: metadata.priority().as_str(),
        state: task.state().as_str(),
        stack: metadata.stack().map(StackName::as_str),
        description: metadata.description(),
        rules: task.rules().iter().map(RuleId::as_str).collect(),
    };

    let environment = Environment::new();
    environment
        .render_str(TASK_TEMPLATE, context)
        .map_err(|error| RenderError {
            reason: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::selection::select_rules;
    use crate::task::domain::{StackName, TaskContext, TaskMetadata, TaskType};
    use mockable::DefaultClock;

    #[test]
    fn rendered_document_contains_rules_section() {
        let clock = DefaultClock;
        let metadata = TaskMetadata::new()
            .with_type(TaskType::Bug)
            .with_context(TaskContext::Web)
            .with_stack(StackName::new("react").expect("valid stack"))
            .with_description("submit button not responding");
        let rules = select_rules(&metadata);
        let task =
            TaskDocument::new("Fix submit button", metadata, rules, &clock).expect("valid task");

        let rendered = render_task_document(&task).expect("render succeeds");

        assert!(rendered.starts_with("# Fix submit button"));
        assert!(rendered.contains("- **Type**: bug"));
        assert!(rendered.contains("- **Stack**: react"));
        assert!(rendered.contains("## Rules to apply"));
        assert!(rendered.contains("- bug-fix"));
        assert!(rendered.contains("- stacks/react"));
    }

    #[test]
    fn stack_line_is_omitted_without_stack() {
        let clock = DefaultClock;
        let metadata = TaskMetadata::new().with_description("update footer copy");
        let rules = select_rules(&metadata);
        let task =
            TaskDocument::new("Update footer", metadata, rules, &clock).expect("valid task");

        let rendered = render_task_document(&task).expect("render succeeds");
        assert!(!rendered.contains("**Stack**"));
    }
}

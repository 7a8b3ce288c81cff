//! Rule selection: mapping task metadata to applicable rule documents.
//!
//! Selection is a pure function over the task metadata. It unions the
//! universal rules, a type-indexed table, a context-indexed table, the
//! stack-scoped rule, and keyword-triggered rules from the description.
//! Unknown metadata never fails; the metadata types default to `feature` /
//! `web` / `medium` upstream, so selection is total.

use crate::rules::domain::{RuleId, RuleSet};
use crate::task::domain::{TaskContext, TaskMetadata, TaskType};

/// Rules applied to every task regardless of metadata.
const UNIVERSAL_RULES: &[&str] = &["code-quality", "testing", "documentation"];

/// Description substrings that pull in the `security` rule.
const SECURITY_KEYWORDS: &[&str] = &[
    "auth",
    "password",
    "token",
    "encrypt",
    "credential",
    "secret",
    "jwt",
    "oauth",
    "permission",
];

/// Description substrings that pull in the `performance` rule.
const PERFORMANCE_KEYWORDS: &[&str] = &[
    "slow",
    "optimize",
    "optimise",
    "latency",
    "performance",
    "throughput",
    "bottleneck",
];

/// Derives the set of rule documents applicable to a task.
///
/// Idempotent and side-effect free: identical metadata always yields an
/// identical set, and duplicates from overlapping tables collapse.
#[must_use]
pub fn select_rules(metadata: &TaskMetadata) -> RuleSet {
    let mut selected: RuleSet = UNIVERSAL_RULES
        .iter()
        .copied()
        .map(RuleId::builtin)
        .collect();

    selected.extend(
        type_rules(metadata.task_type())
            .iter()
            .copied()
            .map(RuleId::builtin),
    );
    selected.extend(
        context_rules(metadata.context())
            .iter()
            .copied()
            .map(RuleId::builtin),
    );

    if let Some(stack) = metadata.stack() {
        selected.insert(RuleId::for_stack(stack));
    }

    let description = metadata.description().to_ascii_lowercase();
    if contains_any(&description, SECURITY_KEYWORDS) {
        selected.insert(RuleId::builtin("security"));
    }
    if contains_any(&description, PERFORMANCE_KEYWORDS) {
        selected.insert(RuleId::builtin("performance"));
    }

    selected
}

/// Rules indexed by task type.
const fn type_rules(task_type: TaskType) -> &'static [&'static str] {
    match task_type {
        TaskType::Feature => &["feature-development"],
        TaskType::Bug => &["bug-fix"],
        TaskType::Deploy => &["ci-cd", "monitoring"],
        TaskType::Refactor => &["code-review"],
        TaskType::Test => &["testing"],
        TaskType::Documentation => &["documentation"],
        TaskType::Chore => &[],
    }
}

/// Rules indexed by task context.
const fn context_rules(context: TaskContext) -> &'static [&'static str] {
    match context {
        TaskContext::Api => &["api-development", "security"],
        TaskContext::Web => &["web-development", "accessibility", "performance"],
        TaskContext::Mobile => &["mobile-development", "accessibility"],
        TaskContext::Fullstack => &["api-development", "web-development", "security"],
        TaskContext::Desktop => &["desktop-development"],
        TaskContext::Ai => &["ai-development"],
        TaskContext::Mcp => &["mcp-development"],
    }
}

/// Case-folded substring scan against a fixed keyword list.
fn contains_any(description: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| description.contains(keyword))
}

//! Lenient front-matter parsing for task documents.
//!
//! Task metadata arrives as `key: value` lines, either inside a leading
//! `---` fenced front-matter block or bare at the top of the document.
//! Parsing never fails: unrecognized or missing values substitute the
//! documented defaults and surface as warnings so a consumer can prompt the
//! author to fill the gaps.

use crate::task::domain::{StackName, TaskContext, TaskMetadata, TaskPriority, TaskType};
use serde::Serialize;
use thiserror::Error;

/// Front-matter fence line.
const FENCE: &str = "---";

/// Non-fatal findings produced while parsing task metadata.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// The `type` value is not one of the enumerated task types.
    #[error("unknown task type '{value}', using default")]
    UnknownTaskType {
        /// Rejected raw value.
        value: String,
    },

    /// The `context` value is not one of the enumerated contexts.
    #[error("unknown task context '{value}', using default")]
    UnknownTaskContext {
        /// Rejected raw value.
        value: String,
    },

    /// The `priority` value is not one of the enumerated priorities.
    #[error("unknown task priority '{value}', using default")]
    UnknownTaskPriority {
        /// Rejected raw value.
        value: String,
    },

    /// The `stack` value is not a valid stack slug.
    #[error("invalid stack name '{value}', ignoring")]
    InvalidStack {
        /// Rejected raw value.
        value: String,
    },

    /// A recognized field is absent from the front matter.
    #[error("missing field '{field}', using default")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
}

/// Outcome of a lenient metadata parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMetadata {
    metadata: TaskMetadata,
    warnings: Vec<ParseWarning>,
}

impl ParsedMetadata {
    /// Returns the parsed metadata with defaults filled in.
    #[must_use]
    pub const fn metadata(&self) -> &TaskMetadata {
        &self.metadata
    }

    /// Returns the warnings collected during parsing.
    #[must_use]
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Consumes the outcome, returning metadata and warnings.
    #[must_use]
    pub fn into_parts(self) -> (TaskMetadata, Vec<ParseWarning>) {
        (self.metadata, self.warnings)
    }
}

/// Raw field values extracted before validation.
#[derive(Debug, Default)]
struct RawFields<'a> {
    task_type: Option<&'a str>,
    context: Option<&'a str>,
    stack: Option<&'a str>,
    priority: Option<&'a str>,
    description: Option<&'a str>,
}

/// Parses task metadata from a Markdown task document.
///
/// Total function: any input yields usable metadata, with gaps reported as
/// warnings rather than errors.
#[must_use]
pub fn parse_front_matter(input: &str) -> ParsedMetadata {
    let (fields, body) = extract_fields(input);
    let mut warnings = Vec::new();
    let mut metadata = TaskMetadata::new();

    metadata = metadata.with_type(parse_field(
        fields.task_type,
        &mut warnings,
        "type",
        |value| {
            TaskType::try_from(value).map_err(|_| ParseWarning::UnknownTaskType {
                value: value.to_owned(),
            })
        },
    ));
    metadata = metadata.with_context(parse_field(
        fields.context,
        &mut warnings,
        "context",
        |value| {
            TaskContext::try_from(value).map_err(|_| ParseWarning::UnknownTaskContext {
                value: value.to_owned(),
            })
        },
    ));
    metadata = metadata.with_priority(parse_field(
        fields.priority,
        &mut warnings,
        "priority",
        |value| {
            TaskPriority::try_from(value).map_err(|_| ParseWarning::UnknownTaskPriority {
                value: value.to_owned(),
            })
        },
    ));

    if let Some(stack) = fields.stack {
        match StackName::new(stack) {
            Ok(name) => metadata = metadata.with_stack(name),
            Err(_) => warnings.push(ParseWarning::InvalidStack {
                value: stack.to_owned(),
            }),
        }
    }

    let description = fields
        .description
        .map(str::to_owned)
        .or_else(|| first_body_line(body))
        .unwrap_or_default();
    metadata = metadata.with_description(description);

    ParsedMetadata { metadata, warnings }
}

/// Parses one enumerated field, warning and defaulting on bad input.
fn parse_field<T: Default>(
    raw: Option<&str>,
    warnings: &mut Vec<ParseWarning>,
    field: &'static str,
    parse: impl FnOnce(&str) -> Result<T, ParseWarning>,
) -> T {
    match raw {
        Some(value) => parse(value).unwrap_or_else(|warning| {
            warnings.push(warning);
            T::default()
        }),
        None => {
            warnings.push(ParseWarning::MissingField { field });
            T::default()
        }
    }
}

/// Extracts recognized `key: value` fields and returns the remaining body.
///
/// With a leading `---` fence, only the fenced block is scanned and the rest
/// of the document is the body. Without a fence, leading `key: value` lines
/// are consumed until the first line that is not one.
fn extract_fields(input: &str) -> (RawFields<'_>, &str) {
    let mut fields = RawFields::default();
    let trimmed = input.trim_start_matches(['\u{feff}']).trim_start();

    if let Some(rest) = trimmed.strip_prefix(FENCE)
        && let Some(newline_rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))
        && let Some((block, body)) = split_at_closing_fence(newline_rest)
    {
        for line in block.lines() {
            assign_field(&mut fields, line);
        }
        return (fields, body);
    }

    let mut consumed = 0;
    for segment in trimmed.split_inclusive('\n') {
        let line = segment.trim_end_matches(['\r', '\n']);
        if is_key_value_line(line) {
            assign_field(&mut fields, line);
            consumed += segment.len();
        } else {
            break;
        }
    }
    let body = trimmed.get(consumed..).unwrap_or("");
    (fields, body)
}

/// Splits front-matter content at the closing `---` fence.
fn split_at_closing_fence(content: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for segment in content.split_inclusive('\n') {
        if segment.trim_end() == FENCE {
            let block = content.get(..offset).unwrap_or("");
            let body = content.get(offset + segment.len()..).unwrap_or("");
            return Some((block, body));
        }
        offset += segment.len();
    }
    None
}

/// Returns whether a line looks like `key: value` for a recognized key.
fn is_key_value_line(line: &str) -> bool {
    line.split_once(':')
        .is_some_and(|(key, _)| is_recognized_key(key.trim()))
}

/// Stores a recognized `key: value` line into the raw field struct.
fn assign_field<'a>(fields: &mut RawFields<'a>, line: &'a str) {
    let Some((key, value)) = line.split_once(':') else {
        return;
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return;
    }
    // First occurrence wins.
    match key.trim().to_ascii_lowercase().as_str() {
        "type" => fields.task_type.get_or_insert(trimmed),
        "context" => fields.context.get_or_insert(trimmed),
        "stack" => fields.stack.get_or_insert(trimmed),
        "priority" => fields.priority.get_or_insert(trimmed),
        "description" => fields.description.get_or_insert(trimmed),
        _ => return,
    };
}

/// Returns whether the key names a recognized metadata field.
fn is_recognized_key(key: &str) -> bool {
    matches!(
        key.to_ascii_lowercase().as_str(),
        "type" | "context" | "stack" | "priority" | "description"
    )
}

/// Falls back to the first non-empty, non-heading body line as description.
fn first_body_line(body: &str) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
}

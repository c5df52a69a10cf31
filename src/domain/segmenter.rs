//! Splits a multi-project report into one line block per project.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Display name used when a project-start line carries no artifact id.
pub const UNKNOWN_PROJECT: &str = "Unknown Project";

static PROJECT_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"maven-dependency-plugin:.*:tree \(default-cli\) @ ([^ ]+) ---")
        .expect("project start pattern is valid")
});

/// Raw report lines belonging to one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBlock<'a> {
    pub name: String,
    /// Lines from the project-start line (inclusive) up to the next one
    pub lines: Vec<&'a str>,
}

/// Returns the project name if `line` starts a new project section.
pub fn project_start(line: &str) -> Option<String> {
    PROJECT_START.captures(line).map(|caps| {
        caps.get(1)
            .map_or(UNKNOWN_PROJECT, |m| m.as_str())
            .to_string()
    })
}

/// Segment a report into project blocks in input order.
///
/// Lines before the first project-start line are discarded. A report with no
/// project-start line at all is an error.
#[instrument(level = "debug", skip(input))]
pub fn segment(input: &str) -> DomainResult<Vec<ProjectBlock<'_>>> {
    let mut blocks: Vec<ProjectBlock<'_>> = Vec::new();

    for line in input.lines() {
        if let Some(name) = project_start(line) {
            debug!("project start: {}", name);
            blocks.push(ProjectBlock {
                name,
                lines: vec![line],
            });
        } else if let Some(current) = blocks.last_mut() {
            current.lines.push(line);
        }
    }

    if blocks.is_empty() {
        return Err(DomainError::NoProjects);
    }
    Ok(blocks)
}

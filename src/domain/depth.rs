//! Indentation-depth parsing for classified tree lines.

use tracing::instrument;

/// "This ancestor chain continues" indentation token.
pub const CONTINUATION_MARKER: &str = "|  ";
/// Branch token for a child that has more siblings.
pub const BRANCH_MARKER: &str = "+- ";
/// Branch token for the last child of its parent.
pub const LAST_BRANCH_MARKER: &str = "\\- ";

/// One dependency coordinate row with its tree depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyLine {
    pub depth: usize,
    pub name: String,
}

impl DependencyLine {
    pub fn new(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
        }
    }
}

/// Computes `(depth, name)` from classified line content.
///
/// Every leading continuation marker adds one level, a trailing branch marker
/// adds one more. Malformed marker runs never fail: whatever is left over
/// becomes part of the name. Rows whose name is not a coordinate (no colon)
/// yield `None`.
#[instrument(level = "trace")]
pub fn parse_depth_and_name(content: &str) -> Option<DependencyLine> {
    let mut rest = content.trim_start();
    let mut depth = 0;

    while let Some(stripped) = rest.strip_prefix(CONTINUATION_MARKER) {
        depth += 1;
        rest = stripped;
    }

    if let Some(stripped) = rest
        .strip_prefix(BRANCH_MARKER)
        .or_else(|| rest.strip_prefix(LAST_BRANCH_MARKER))
    {
        depth += 1;
        rest = stripped;
    }

    let name = rest.trim();
    if !name.contains(':') {
        return None;
    }
    Some(DependencyLine::new(depth, name))
}

//! Line classification: picks dependency-tree content out of build log noise.

use tracing::instrument;

/// Marker token the report tool prefixes its tree lines with.
pub const DEFAULT_MARKER: &str = "[INFO]";

/// Content prefixes that belong to the build log, not to the tree.
const NON_CONTENT_PREFIXES: [&str; 9] = [
    "BUILD SUCCESS",
    "BUILD FAILURE",
    "Total time",
    "Finished at",
    "Finished",
    "Scanning for projects...",
    "Reactor Summary",
    "Reactor Build Order",
    // plugin execution banners, including the project-start line
    "---",
];

/// Decides whether a raw report line carries tree content.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    marker: String,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl LineClassifier {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Returns the line content after the marker, or `None` for noise.
    #[instrument(level = "trace", skip(self))]
    pub fn classify<'a>(&self, line: &'a str) -> Option<&'a str> {
        let idx = line.find(self.marker.as_str())?;
        let content = line[idx + self.marker.len()..].trim();

        if is_non_content(content) || !content.contains(':') {
            return None;
        }
        Some(content)
    }
}

fn is_non_content(content: &str) -> bool {
    content.is_empty()
        || NON_CONTENT_PREFIXES
            .iter()
            .any(|prefix| content.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[INFO] com.acme:app:jar:1.0", Some("com.acme:app:jar:1.0"))]
    #[case("[INFO] +- com.acme:lib-a:jar:1.0:compile", Some("+- com.acme:lib-a:jar:1.0:compile"))]
    #[case("  [INFO]    |  \\- a:b:jar:1  ", Some("|  \\- a:b:jar:1"))]
    #[case("[INFO] BUILD SUCCESS", None)]
    #[case("[INFO] Total time:  1.843 s", None)]
    #[case("[INFO] Finished at: 2024-01-01T10:00:00Z", None)]
    #[case("[INFO] Scanning for projects...", None)]
    #[case("[INFO] Reactor Summary for parent 1.0:", None)]
    #[case("[INFO] -----------------< com.acme:app >-----------------", None)]
    #[case("[INFO] --- maven-dependency-plugin:2.8:tree (default-cli) @ app ---", None)]
    #[case("[INFO] ------------------------------------------------------------------------", None)]
    #[case("[INFO] Building app 1.0", None)]
    #[case("[INFO]", None)]
    #[case("[WARNING] com.acme:app:jar:1.0", None)]
    #[case("com.acme:app:jar:1.0", None)]
    fn given_raw_line_when_classifying_then_keeps_only_tree_content(
        #[case] line: &str,
        #[case] expected: Option<&str>,
    ) {
        let classifier = LineClassifier::default();
        assert_eq!(classifier.classify(line), expected);
    }

    #[test]
    fn given_custom_marker_when_classifying_then_uses_it() {
        let classifier = LineClassifier::new("[DEBUG]");
        assert_eq!(classifier.classify("[DEBUG] a:b:c"), Some("a:b:c"));
        assert_eq!(classifier.classify("[INFO] a:b:c"), None);
    }
}

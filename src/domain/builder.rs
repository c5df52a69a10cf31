//! Tree builder reconstructing dependency hierarchies from indented report lines.

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{DependencyTree, ROOT_DEPTH};
use crate::domain::classifier::LineClassifier;
use crate::domain::depth::{parse_depth_and_name, DependencyLine};

/// Constructs a rooted dependency tree from one project's report lines.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    classifier: LineClassifier,
}

impl TreeBuilder {
    pub fn new(classifier: LineClassifier) -> Self {
        Self { classifier }
    }

    /// Classify and parse raw lines, then build the tree.
    ///
    /// Returns `None` when no line carries a dependency coordinate.
    #[instrument(level = "debug", skip(self, lines))]
    pub fn build_from_lines<'a, I>(&self, lines: I) -> Option<DependencyTree>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let entries = lines
            .into_iter()
            .filter_map(|line| self.classifier.classify(line))
            .filter_map(parse_depth_and_name);
        Self::build(entries)
    }

    /// Build a tree from `(depth, name)` rows in source order.
    ///
    /// Keeps a stack of open ancestors seeded with the synthetic root. Each row
    /// pops every ancestor at the same or a deeper level and becomes the last
    /// child of whatever remains on top. Depth gaps nest under the nearest
    /// shallower ancestor.
    pub fn build<I>(entries: I) -> Option<DependencyTree>
    where
        I: IntoIterator<Item = DependencyLine>,
    {
        let mut tree = DependencyTree::new();
        let mut stack: Vec<(Index, i32)> = vec![(tree.root(), ROOT_DEPTH)];

        for entry in entries {
            let depth = i32::try_from(entry.depth).unwrap_or(i32::MAX);

            // the root sits at ROOT_DEPTH and is never popped
            while stack.last().is_some_and(|&(_, d)| d >= depth) {
                stack.pop();
            }
            let parent = stack.last().map_or(tree.root(), |&(idx, _)| idx);

            let idx = tree.insert_node(&entry.name, depth, parent);
            stack.push((idx, depth));
        }

        if tree.is_empty() {
            return None;
        }
        debug!("built tree with {} nodes", tree.len());
        Some(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_of(tree: &DependencyTree, idx: Index) -> Vec<String> {
        tree.get_node(idx)
            .unwrap()
            .children
            .iter()
            .map(|&c| tree.get_node(c).unwrap().name.clone())
            .collect()
    }

    #[test]
    fn given_no_entries_when_building_then_returns_none() {
        assert!(TreeBuilder::build(Vec::<DependencyLine>::new()).is_none());
    }

    #[test]
    fn given_depth_gap_when_building_then_nests_under_nearest_ancestor() {
        let tree = TreeBuilder::build(vec![
            DependencyLine::new(0, "g:a"),
            DependencyLine::new(3, "g:deep"),
            DependencyLine::new(1, "g:b"),
        ])
        .unwrap();

        let a = tree.top_level()[0];
        assert_eq!(names_of(&tree, a), vec!["g:deep", "g:b"]);
    }

    #[test]
    fn given_repeated_top_level_rows_when_building_then_all_hang_from_root() {
        let tree = TreeBuilder::build(vec![
            DependencyLine::new(0, "g:a"),
            DependencyLine::new(1, "g:b"),
            DependencyLine::new(0, "g:c"),
        ])
        .unwrap();

        assert_eq!(names_of(&tree, tree.root()), vec!["g:a", "g:c"]);
    }
}
